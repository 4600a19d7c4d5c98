use std::time::Duration;

use leptos::{either::Either, prelude::*};

#[cfg(feature = "ssr")]
use std::sync::Arc;

use super::{
    reveal::{reveal_items, Reveal, RevealGroup},
    SectionHeading,
};
#[cfg(feature = "ssr")]
use crate::contact::{ContactMessage, ContactSink, LogSink};
use crate::{
    contact::{ContactError, ContactForm, Field},
    content::{portfolio, settings},
    nav::Section,
};

/// Shared delivery backend, provided as context by the server.
#[cfg(feature = "ssr")]
pub type SharedSink = Arc<dyn ContactSink>;

const INPUT_CLASS: &str = "w-full bg-dark-lighter rounded-lg border border-white/10 px-4 py-3 text-white placeholder:text-white/50 focus:outline-none focus:border-neon-blue transition-all duration-300";

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    let message = ContactMessage {
        name,
        email,
        message,
    };
    if let Err(e) = message.validate() {
        return Err(ServerFnError::new(e));
    }
    tokio::time::sleep(settings().submit_delay()).await;
    let sink = use_context::<SharedSink>().unwrap_or_else(|| Arc::new(LogSink));
    sink.deliver(&message).map_err(|e| {
        tracing::warn!("Contact delivery failed: {e}");
        ServerFnError::new(e)
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let p = portfolio();
    let items = reveal_items(&[("heading", 0), ("socials", 200), ("form", 400)]);

    view! {
        <RevealGroup items>
            <section id=Section::Contact.anchor() class="py-20 bg-dark relative">
                <div class="absolute top-0 left-0 w-full h-20 bg-gradient-to-b from-dark-lighter to-transparent"></div>
                <div class="absolute top-1/3 left-0 w-64 h-64 rounded-full bg-neon-blue/10 blur-[80px]"></div>
                <div class="absolute bottom-1/4 right-0 w-80 h-80 rounded-full bg-neon-violet/10 blur-[100px]"></div>

                <div class="container mx-auto px-4">
                    <Reveal key="heading" class="text-center mb-16">
                        <SectionHeading
                            title="Get In Touch"
                            subtitle="Have a project in mind or want to collaborate? Feel free to reach out."
                        />
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        <Reveal key="socials">
                            <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
                            <p class="text-white/70 mb-8">
                                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. Feel free to reach out using the form or through my social profiles."
                            </p>
                            <div class="space-y-4">
                                {p
                                    .socials
                                    .iter()
                                    .map(|social| {
                                        let accent = social.kind.accent();
                                        view! {
                                            <div class="flex items-center gap-4">
                                                <div class=format!(
                                                    "w-10 h-10 rounded-full flex items-center justify-center {}",
                                                    accent.tint(),
                                                )>
                                                    <i class=format!(
                                                        "{} {}",
                                                        social.kind.icon(),
                                                        accent.text(),
                                                    ) />
                                                </div>
                                                <a
                                                    href=social.url.as_str()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class=format!(
                                                        "text-white/80 transition-colors duration-300 {}",
                                                        accent.hover_text(),
                                                    )
                                                >
                                                    {social.label.as_str()}
                                                </a>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                        <Reveal key="form">
                            <ContactFormView />
                        </Reveal>
                    </div>
                </div>
            </section>
        </RevealGroup>
    }
}

/// One-shot timer that hides the success notice.
trait NoticeTimer: Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    fn start(&self, delay: Duration, done: Box<dyn FnOnce() + Send>) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` on the browser window.
struct WindowTimer;

impl NoticeTimer for WindowTimer {
    type Handle = TimeoutHandle;

    fn start(&self, delay: Duration, done: Box<dyn FnOnce() + Send>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(done, delay)
            .map_err(|e| log::warn!("Couldn't schedule notice dismissal: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Applies finished submissions to the form and hides the success notice
/// after `delay`. A pending dismissal is cancelled when a newer success
/// replaces it or when the owner is cleaned up.
struct NoticeDismissal<T: NoticeTimer> {
    form: RwSignal<ContactForm>,
    timer: StoredValue<T>,
    pending: StoredValue<Option<T::Handle>>,
    delay: Duration,
}

impl<T: NoticeTimer> Clone for NoticeDismissal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: NoticeTimer> Copy for NoticeDismissal<T> {}

impl<T: NoticeTimer> NoticeDismissal<T> {
    fn new(form: RwSignal<ContactForm>, timer: T, delay: Duration) -> Self {
        let dismissal = Self {
            form,
            timer: StoredValue::new(timer),
            pending: StoredValue::new(None),
            delay,
        };
        on_cleanup(move || dismissal.cancel());
        dismissal
    }

    fn settle(&self, result: Result<(), ContactError>) {
        self.form.update(|f| f.complete(result));
        if !self.form.with_untracked(ContactForm::shows_notice) {
            return;
        }
        self.cancel();
        let form = self.form;
        let handle = self.timer.with_value(|t| {
            t.start(
                self.delay,
                Box::new(move || {
                    form.try_update(ContactForm::dismiss_notice);
                }),
            )
        });
        self.pending.set_value(handle);
    }

    fn cancel(&self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            self.timer.try_with_value(|t| t.cancel(handle));
        }
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let submit = ServerAction::<SubmitContact>::new();
    let notice = NoticeDismissal::new(form, WindowTimer, settings().notice_duration());

    Effect::watch(
        move || submit.value().get(),
        move |value, _, _| {
            if let Some(result) = value.clone() {
                notice.settle(result.map_err(|e| ContactError::Delivery(e.to_string())));
            }
        },
        false,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(msg)) => {
                submit.dispatch(SubmitContact {
                    name: msg.name,
                    email: msg.email,
                    message: msg.message,
                });
            }
            Some(Err(e)) => log::debug!("Contact form not submitted: {e}"),
            None => {}
        }
    };

    let is_submitting = move || form.with(ContactForm::is_submitting);
    let button_class = move || {
        let base = "flex items-center justify-center gap-2 w-full bg-gradient-to-r from-neon-blue to-neon-violet text-white font-medium py-3 px-6 rounded-lg transition-all duration-300 hover:shadow-[0_0_15px_rgba(0,240,255,0.5)]";
        if is_submitting() {
            format!("{base} opacity-70 cursor-not-allowed")
        } else {
            base.to_string()
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field form /> })
                .collect_view()}
            <button type="submit" disabled=is_submitting class=button_class>
                {move || {
                    if is_submitting() {
                        Either::Left(
                            view! {
                                <span class="animate-spin h-4 w-4 border-2 border-white/60 border-t-white rounded-full mr-2"></span>
                                "Sending..."
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                "Send Message"
                                <span aria-hidden="true">"➤"</span>
                            },
                        )
                    }
                }}
            </button>
            <Show when=move || form.with(ContactForm::shows_notice)>
                <div class="p-4 bg-neon-blue/20 border border-neon-blue text-white rounded-lg animate-fade-in-up">
                    "Thank you! Your message has been sent successfully."
                </div>
            </Show>
            {move || {
                form.with(|f| f.error().map(ToString::to_string))
                    .map(|err| {
                        view! {
                            <div class="p-4 bg-red-500/20 border border-red-500 text-white rounded-lg">
                                {err}
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let name = field.input_name();
    let value = move || form.with(|f| f.get(field).to_string());
    view! {
        <div class="relative">
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                name=name
                                id=name
                                prop:value=value
                                on:input=move |ev| {
                                    form.update(|f| f.set(field, event_target_value(&ev)))
                                }
                                required
                                rows=5
                                class=format!("{INPUT_CLASS} resize-none")
                                placeholder=field.placeholder()
                            ></textarea>
                        },
                    )
                }
                Field::Name | Field::Email => {
                    Either::Right(
                        view! {
                            <input
                                type=if field == Field::Email { "email" } else { "text" }
                                name=name
                                id=name
                                prop:value=value
                                on:input=move |ev| {
                                    form.update(|f| f.set(field, event_target_value(&ev)))
                                }
                                required
                                class=INPUT_CLASS
                                placeholder=field.placeholder()
                            />
                        },
                    )
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::contact::SubmissionStatus;

    type Callback = Box<dyn FnOnce() + Send>;

    /// Timer whose callbacks run only when a test fires them.
    #[derive(Clone, Default)]
    struct ManualTimer {
        started: Arc<Mutex<Vec<(Duration, Option<Callback>)>>>,
        cancelled: Arc<Mutex<Vec<usize>>>,
    }

    impl ManualTimer {
        fn delays(&self) -> Vec<Duration> {
            self.started.lock().unwrap().iter().map(|(d, _)| *d).collect()
        }

        fn cancelled(&self) -> Vec<usize> {
            self.cancelled.lock().unwrap().clone()
        }

        fn fire(&self, handle: usize) {
            let done = self.started.lock().unwrap()[handle].1.take();
            if let Some(done) = done {
                done();
            }
        }
    }

    impl NoticeTimer for ManualTimer {
        type Handle = usize;

        fn start(&self, delay: Duration, done: Callback) -> Option<usize> {
            let mut started = self.started.lock().unwrap();
            started.push((delay, Some(done)));
            Some(started.len() - 1)
        }

        fn cancel(&self, handle: usize) {
            self.started.lock().unwrap()[handle].1 = None;
            self.cancelled.lock().unwrap().push(handle);
        }
    }

    fn in_flight_form() -> RwSignal<ContactForm> {
        let form = RwSignal::new(ContactForm::new());
        form.update(|f| {
            f.set(Field::Name, "Ada");
            f.set(Field::Email, "ada@example.com");
            f.set(Field::Message, "Hello");
            f.begin_submit().expect("form should be complete");
        });
        form
    }

    const NOTICE: Duration = Duration::from_secs(5);

    #[test]
    fn test_success_notice_hides_when_timer_fires() {
        let owner = Owner::new();
        owner.with(|| {
            let form = in_flight_form();
            let timer = ManualTimer::default();
            let notice = NoticeDismissal::new(form, timer.clone(), NOTICE);

            notice.settle(Ok(()));
            assert!(form.with_untracked(ContactForm::shows_notice));
            assert_eq!(timer.delays(), vec![NOTICE]);

            timer.fire(0);
            assert_eq!(form.with_untracked(|f| f.status().clone()), SubmissionStatus::Idle);
        });
    }

    #[test]
    fn test_failure_keeps_fields_and_schedules_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let form = in_flight_form();
            let timer = ManualTimer::default();
            let notice = NoticeDismissal::new(form, timer.clone(), NOTICE);

            notice.settle(Err(ContactError::Delivery("offline".to_string())));
            assert!(timer.delays().is_empty());
            assert!(form.with_untracked(|f| f.error().is_some()));
            assert_eq!(form.with_untracked(|f| f.get(Field::Name).to_string()), "Ada");
        });
    }

    #[test]
    fn test_newer_success_replaces_pending_dismissal() {
        let owner = Owner::new();
        owner.with(|| {
            let form = in_flight_form();
            let timer = ManualTimer::default();
            let notice = NoticeDismissal::new(form, timer.clone(), NOTICE);

            notice.settle(Ok(()));
            form.update(|f| {
                f.set(Field::Name, "Grace");
                f.set(Field::Email, "grace@example.com");
                f.set(Field::Message, "Again");
                f.begin_submit().expect("form should be complete");
            });
            notice.settle(Ok(()));

            assert_eq!(timer.cancelled(), vec![0]);
            timer.fire(0);
            assert!(form.with_untracked(ContactForm::shows_notice));
            timer.fire(1);
            assert!(!form.with_untracked(ContactForm::shows_notice));
        });
    }

    #[test]
    fn test_cleanup_cancels_pending_dismissal() {
        let owner = Owner::new();
        let timer = ManualTimer::default();
        owner.with(|| {
            let form = in_flight_form();
            let notice = NoticeDismissal::new(form, timer.clone(), NOTICE);
            notice.settle(Ok(()));
        });

        owner.cleanup();
        assert_eq!(timer.cancelled(), vec![0]);
        // firing after unmount touches nothing
        timer.fire(0);
    }
}
