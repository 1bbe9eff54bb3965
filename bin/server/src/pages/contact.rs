//! Contact page component and server functions.

use crate::app::{ADDRESS, BUSINESS_NAME, CONTACT_EMAIL, CONTACT_PHONE, SOCIAL_LINKS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use makaya_core::ContactForm;

/// Server function to store a contact form message.
///
/// Returns the confirmation text shown to the sender.
#[server]
pub async fn submit_contact_message(form: ContactForm) -> Result<String, ServerFnError> {
    use crate::db::ContactMessageRepository;
    use crate::error::MessageError;
    use crate::server_helpers::get_db_pool;

    let message = form.validate().map_err(|e| {
        tracing::debug!(error = %e, "Rejected contact message");
        MessageError::Invalid(e).into_server_error()
    })?;

    let repo = ContactMessageRepository::new(get_db_pool());
    repo.create(&message).await.map_err(|e| {
        tracing::error!(
            error = %e,
            message_id = %message.id,
            "Failed to store contact message"
        );
        MessageError::DatabaseError {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    tracing::info!(
        message_id = %message.id,
        subject = %message.subject,
        "Received contact message"
    );

    Ok(message.confirmation())
}

static HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "8:00 AM - 6:00 PM"),
    ("Saturday", "9:00 AM - 5:00 PM"),
    ("Sunday", "Closed"),
];

/// Contact page with the message form and ways to reach us.
#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (result, set_result) = signal(Option::<Result<String, String>>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        set_sending.set(true);
        set_result.set(None);
        spawn_local(async move {
            match submit_contact_message(form).await {
                Ok(confirmation) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_result.set(Some(Ok(confirmation)));
                }
                Err(e) => set_result.set(Some(Err(e.to_string()))),
            }
            set_sending.set(false);
        });
    };

    let methods = [
        ("Email", CONTACT_EMAIL, "Send us an email anytime"),
        ("Phone", CONTACT_PHONE, "Mon-Sat from 8am to 6pm"),
        ("Address", ADDRESS, "Visit us in person"),
    ];

    view! {
        <div class="contact-page">
            <section class="page-header">
                <span class="badge">"Get in Touch"</span>
                <h1>"Contact Us"</h1>
                <p class="lead">
                    "Have questions about your stay? We're here to help! Reach out to us through any of the methods below."
                </p>
            </section>

            <div class="tile-grid">
                {methods
                    .into_iter()
                    .map(|(title, value, description)| {
                        view! {
                            <div class="card">
                                <h3 class="card-title">{title}</h3>
                                <p><strong>{value}</strong></p>
                                <p class="muted">{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="two-column two-column--wide-left">
                <div class="card">
                    <h2 class="card-title">"Send us a Message"</h2>
                    <p class="card-description">
                        "Fill out the form below and we'll respond within 24 hours"
                    </p>
                    <form class="form" on:submit=on_submit>
                        <div class="form-row">
                            <label>
                                "Name *"
                                <input
                                    type="text"
                                    placeholder="John Doe"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Email *"
                                <input
                                    type="email"
                                    placeholder="john@example.com"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <div class="form-row">
                            <label>
                                "Phone"
                                <input
                                    type="tel"
                                    placeholder="+63 XXX XXX XXXX"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Subject *"
                                <input
                                    type="text"
                                    placeholder="Inquiry about booking"
                                    required
                                    prop:value=move || subject.get()
                                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <label>
                            "Message *"
                            <textarea
                                rows="6"
                                placeholder="How can we help you?"
                                required
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="button button--primary" disabled=move || sending.get()>
                            {move || if sending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || {
                            result
                                .get()
                                .map(|r| match r {
                                    Ok(text) => view! { <p class="notice notice--success">{text}</p> }.into_any(),
                                    Err(text) => view! { <p class="notice notice--error">{text}</p> }.into_any(),
                                })
                        }}
                    </form>
                </div>

                <div class="stack">
                    <div class="card">
                        <h3 class="card-title">"Operating Hours"</h3>
                        <ul class="hours">
                            {HOURS
                                .iter()
                                .map(|(day, hours)| {
                                    view! {
                                        <li>
                                            <span>{*day}</span>
                                            <span class="muted">{*hours}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="card">
                        <h3 class="card-title">"Follow Us"</h3>
                        <p class="card-description">"Stay connected on social media"</p>
                        <div class="actions">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, url)| {
                                    view! { <a href=*url class="button button--outline">{*label}</a> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <section class="section">
                <div class="section-header">
                    <h2>"Our Location"</h2>
                    <p>"Conveniently located in the heart of Manila"</p>
                </div>
                <div class="card location-card">
                    <p><strong>{BUSINESS_NAME}</strong></p>
                    <p>{ADDRESS}</p>
                    <p class="muted">"Free parking available on-site for all guests. Secure and monitored 24/7."</p>
                </div>
            </section>

            <section class="section cta">
                <h3>"Frequently Asked Questions"</h3>
                <p>
                    "Need quick answers? Check out our house rules for common inquiries about bookings, amenities, and policies."
                </p>
                <a href="/about#house-rules" class="button button--outline">"View House Rules"</a>
            </section>
        </div>
    }
}
