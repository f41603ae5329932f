//! Sign-in, sign-up and password-reset forms shown on the landing page.
//!
//! Sign-up and reset both go through an emailed one-time password:
//! `SignUp -> OtpSignup -> home` and `ResetRequest -> OtpReset -> NewPassword`.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::bind;
use crate::components::icons::{icon_eye, icon_eye_off};
use crate::config;
use crate::error::{ApiError, ValidationError};
use crate::route::{navigate, Route};

pub const MIN_PASSWORD_LEN: usize = 8;

const SIGNUP_OTP_TEXT: &str = "This is your one time password to register into MoneyMind";
const RESET_OTP_TEXT: &str = "This is your one time password to reset password";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthForm {
    SignIn,
    SignUp,
    OtpSignup,
    ResetRequest,
    OtpReset,
    NewPassword,
}

impl AuthForm {
    pub fn title(&self) -> &'static str {
        match self {
            AuthForm::SignIn => "Welcome Back",
            AuthForm::SignUp => "Create Account",
            AuthForm::ResetRequest => "Reset Password",
            AuthForm::OtpSignup | AuthForm::OtpReset => "Verify OTP",
            AuthForm::NewPassword => "New Password",
        }
    }

    fn submit_label(&self, loading: bool) -> &'static str {
        match (self, loading) {
            (AuthForm::SignIn, false) => "Sign In",
            (AuthForm::SignIn, true) => "Signing in...",
            (AuthForm::SignUp | AuthForm::ResetRequest, false) => "Continue",
            (AuthForm::SignUp | AuthForm::ResetRequest, true) => "Sending OTP...",
            (AuthForm::OtpSignup | AuthForm::OtpReset, false) => "Verify OTP",
            (AuthForm::OtpSignup | AuthForm::OtpReset, true) => "Verifying...",
            (AuthForm::NewPassword, false) => "Reset Password",
            (AuthForm::NewPassword, true) => "Resetting...",
        }
    }

    fn asks_for_email(&self) -> bool {
        matches!(self, AuthForm::SignIn | AuthForm::SignUp | AuthForm::ResetRequest)
    }

    fn asks_for_password(&self) -> bool {
        matches!(self, AuthForm::SignIn | AuthForm::SignUp | AuthForm::NewPassword)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormMessage {
    Info(String),
    Error(String),
}

impl FormMessage {
    fn class_name(&self) -> &'static str {
        match self {
            FormMessage::Info(_) => "text-center text-sm text-green-400",
            FormMessage::Error(_) => "text-center text-sm text-red-400",
        }
    }

    fn text(&self) -> &str {
        match self {
            FormMessage::Info(text) | FormMessage::Error(text) => text,
        }
    }
}

/// Values typed so far. They survive switches between forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFields {
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub otp: String,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Switch(AuthForm, Option<FormMessage>),
    Show(FormMessage),
    EnterHome,
}

pub fn check_credentials(fields: &AuthFields) -> Result<(), ValidationError> {
    if fields.email.trim().is_empty() {
        return Err(ValidationError::MissingField("Email"));
    }
    if fields.password.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }
    Ok(())
}

pub fn check_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

async fn submit(api: ApiClient, form: AuthForm, fields: AuthFields) -> Result<Outcome, ApiError> {
    let email = fields.email.trim();
    match form {
        AuthForm::SignIn => {
            check_credentials(&fields)?;
            api.sign_in(email, &fields.password).await?;
            Ok(Outcome::EnterHome)
        }
        AuthForm::SignUp => {
            check_credentials(&fields)?;
            if fields.password.chars().count() < MIN_PASSWORD_LEN {
                return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN).into());
            }
            if api.user_exists(email).await? {
                return Ok(Outcome::Show(FormMessage::Error("Email Already registered".to_string())));
            }
            api.generate_otp(email, SIGNUP_OTP_TEXT).await?;
            Ok(Outcome::Switch(
                AuthForm::OtpSignup,
                Some(FormMessage::Info("OTP sent to your email".to_string())),
            ))
        }
        AuthForm::ResetRequest => {
            if email.is_empty() {
                return Err(ValidationError::MissingField("Email").into());
            }
            if !api.user_exists(email).await? {
                return Ok(Outcome::Show(FormMessage::Error("Email is not registered".to_string())));
            }
            api.generate_otp(email, RESET_OTP_TEXT).await?;
            Ok(Outcome::Switch(
                AuthForm::OtpReset,
                Some(FormMessage::Info("OTP sent to your email".to_string())),
            ))
        }
        AuthForm::OtpSignup => {
            if fields.otp.trim().is_empty() {
                return Err(ValidationError::MissingField("OTP").into());
            }
            api.verify_otp(fields.otp.trim()).await?;
            api.sign_up(email, &fields.password).await?;
            Ok(Outcome::EnterHome)
        }
        AuthForm::OtpReset => {
            if fields.otp.trim().is_empty() {
                return Err(ValidationError::MissingField("OTP").into());
            }
            api.verify_otp(fields.otp.trim()).await?;
            Ok(Outcome::Switch(AuthForm::NewPassword, None))
        }
        AuthForm::NewPassword => {
            check_new_password(&fields.password, &fields.confirm)?;
            api.reset_password(email, &fields.password).await?;
            Ok(Outcome::Show(FormMessage::Info(
                "Password reset successful. Click below to sign in.".to_string(),
            )))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthFormsProps {
    pub initial: AuthForm,
}

#[function_component(AuthForms)]
pub fn auth_forms(props: &AuthFormsProps) -> Html {
    let form = use_state(|| props.initial);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let otp = use_state(String::new);
    let message = use_state(|| None::<FormMessage>);
    let loading = use_state(|| false);
    let show_password = use_state(|| false);
    let show_confirm = use_state(|| false);

    {
        let form = form.clone();
        let message = message.clone();
        use_effect_with_deps(
            move |initial| {
                form.set(*initial);
                message.set(None);
                || ()
            },
            props.initial,
        );
    }

    let switch_to = {
        let form = form.clone();
        let message = message.clone();
        move |target: AuthForm| {
            let form = form.clone();
            let message = message.clone();
            Callback::from(move |_: MouseEvent| {
                message.set(None);
                form.set(target);
            })
        }
    };

    let on_submit = {
        let form = form.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let otp = otp.clone();
        let message = message.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let fields = AuthFields {
                email: (*email).clone(),
                password: (*password).clone(),
                confirm: (*confirm).clone(),
                otp: (*otp).clone(),
            };
            let current = *form;
            let form = form.clone();
            let message = message.clone();
            let loading = loading.clone();
            message.set(None);
            loading.set(true);
            spawn_local(async move {
                match submit(ApiClient::default(), current, fields).await {
                    Ok(Outcome::EnterHome) => {
                        log::info!("signed in");
                        navigate(Route::Home);
                    }
                    Ok(Outcome::Switch(next, note)) => {
                        form.set(next);
                        message.set(note);
                    }
                    Ok(Outcome::Show(note)) => message.set(Some(note)),
                    Err(err) => {
                        log::warn!("{:?} failed: {}", current, err);
                        message.set(Some(FormMessage::Error(err.user_message())));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_google_error = {
        let message = message.clone();
        Callback::from(move |text: String| message.set(Some(FormMessage::Error(text))))
    };

    let current = *form;
    let link_class = "text-[#83bce3] hover:text-white underline decoration-gray-500 transition duration-200";
    let input_class = "w-full px-5 py-3 text-base rounded-lg bg-black/30 text-white border border-gray-700 focus:border-[#83bce3] focus:outline-none transition duration-200";

    html! {
        <div class="w-full max-w-md bg-[#1a1a2e] border border-white/10 p-8 rounded-xl shadow-2xl">
            <h2 class="text-2xl font-bold text-white mb-6">{ current.title() }</h2>

            <form class="space-y-5" onsubmit={on_submit}>
                if current.asks_for_email() {
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-gray-300">{"Email"}</label>
                        <input class={input_class} type="email" placeholder="Enter your email" required=true
                            value={(*email).clone()} oninput={bind(&email)} />
                    </div>
                }

                if current.asks_for_password() {
                    { password_input(
                        if current == AuthForm::NewPassword { "New Password" } else { "Password" },
                        &password,
                        &show_password,
                        input_class,
                    ) }
                }

                if current == AuthForm::NewPassword {
                    { password_input("Confirm Password", &confirm, &show_confirm, input_class) }
                }

                if matches!(current, AuthForm::OtpSignup | AuthForm::OtpReset) {
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-gray-300">{"Enter OTP"}</label>
                        <input class={input_class} type="text" inputmode="numeric" placeholder="Enter the OTP sent to your email" required=true
                            value={(*otp).clone()} oninput={bind(&otp)} />
                    </div>
                }

                <button type="submit" disabled={*loading}
                    class="w-full py-3 px-6 text-base bg-[#83bce3] text-black font-semibold rounded-lg hover:bg-white transition-all duration-300 disabled:opacity-50">
                    { current.submit_label(*loading) }
                </button>

                if let Some(note) = &*message {
                    <p class={note.class_name()}>{ note.text().to_string() }</p>
                }

                {
                    match current {
                        AuthForm::SignIn => html! {
                            <div class="flex justify-between text-sm">
                                <button type="button" class={link_class} onclick={switch_to(AuthForm::ResetRequest)}>{"Forgot password?"}</button>
                                <button type="button" class={link_class} onclick={switch_to(AuthForm::SignUp)}>{"Create account"}</button>
                            </div>
                        },
                        AuthForm::SignUp => html! {
                            <p class="text-center text-sm text-gray-400">
                                {"Already have an account? "}
                                <button type="button" class={link_class} onclick={switch_to(AuthForm::SignIn)}>{"Sign In"}</button>
                            </p>
                        },
                        _ => html! {
                            <p class="text-center text-sm">
                                <button type="button" class={link_class} onclick={switch_to(AuthForm::SignIn)}>{"Back to Sign In"}</button>
                            </p>
                        },
                    }
                }
            </form>

            if matches!(current, AuthForm::SignIn | AuthForm::SignUp) {
                if let Some(client_id) = config::google_client_id() {
                    <div class="mt-6 flex justify-center">
                        <GoogleSignIn client_id={client_id} on_error={on_google_error} />
                    </div>
                }
            }
        </div>
    }
}

fn password_input(
    label: &'static str,
    value: &UseStateHandle<String>,
    visible: &UseStateHandle<bool>,
    input_class: &'static str,
) -> Html {
    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_| visible.set(!*visible))
    };
    html! {
        <div class="space-y-2">
            <label class="text-sm font-medium text-gray-300">{ label }</label>
            <div class="relative">
                <input class={input_class} type={if **visible { "text" } else { "password" }} required=true
                    value={(**value).clone()} oninput={bind(value)} />
                <button type="button" class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-400 hover:text-white"
                    onclick={toggle} aria-label={if **visible { "Hide password" } else { "Show password" }}>
                    { if **visible { icon_eye_off() } else { icon_eye() } }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GoogleSignInProps {
    pub client_id: &'static str,
    pub on_error: Callback<String>,
}

/// Google Identity Services button. The GSI script is loaded by the host
/// page; the credential it hands back is exchanged for a session cookie.
#[function_component(GoogleSignIn)]
pub fn google_sign_in(props: &GoogleSignInProps) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        let on_error = props.on_error.clone();
        use_effect_with_deps(
            move |client_id| {
                let on_credential = {
                    let on_error = on_error.clone();
                    Closure::wrap(Box::new(move |response: JsValue| {
                        let credential = Reflect::get(&response, &"credential".into())
                            .ok()
                            .and_then(|value| value.as_string());
                        let on_error = on_error.clone();
                        spawn_local(async move {
                            let result = match credential {
                                Some(credential) => ApiClient::default().google_sign_in(&credential).await,
                                None => Err(ApiError::Rejected("Google login failed. Please try again.".to_string())),
                            };
                            match result {
                                Ok(()) => navigate(Route::Home),
                                Err(err) => {
                                    log::warn!("google sign-in failed: {}", err);
                                    on_error.emit(err.user_message());
                                }
                            }
                        });
                    }) as Box<dyn FnMut(JsValue)>)
                };

                if let Some(element) = container.cast::<web_sys::Element>() {
                    if let Err(err) = render_gsi_button(&element, client_id, on_credential.as_ref()) {
                        log::warn!("google sign-in unavailable: {:?}", err);
                    }
                }

                move || drop(on_credential)
            },
            props.client_id,
        );
    }

    html! { <div ref={container}></div> }
}

fn render_gsi_button(container: &web_sys::Element, client_id: &str, callback: &JsValue) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let google = Reflect::get(&window, &"google".into())?;
    if google.is_undefined() {
        return Err(JsValue::from_str("Google Identity Services script not loaded"));
    }
    let id = Reflect::get(&Reflect::get(&google, &"accounts".into())?, &"id".into())?;

    let settings = Object::new();
    Reflect::set(&settings, &"client_id".into(), &client_id.into())?;
    Reflect::set(&settings, &"callback".into(), callback)?;
    let initialize: Function = Reflect::get(&id, &"initialize".into())?.dyn_into()?;
    initialize.call1(&id, &settings)?;

    let options = Object::new();
    Reflect::set(&options, &"theme".into(), &"outline".into())?;
    Reflect::set(&options, &"shape".into(), &"rectangular".into())?;
    Reflect::set(&options, &"text".into(), &"continue_with".into())?;
    let render: Function = Reflect::get(&id, &"renderButton".into())?.dyn_into()?;
    render.call2(&id, container, &options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_forms_share_a_title() {
        assert_eq!(AuthForm::OtpSignup.title(), AuthForm::OtpReset.title());
        assert_eq!(AuthForm::SignIn.title(), "Welcome Back");
    }

    #[test]
    fn credentials_need_email_then_password() {
        let mut fields = AuthFields::default();
        assert_eq!(check_credentials(&fields), Err(ValidationError::MissingField("Email")));
        fields.email = "a@b.com".to_string();
        assert_eq!(check_credentials(&fields), Err(ValidationError::MissingField("Password")));
        fields.password = "secret".to_string();
        assert!(check_credentials(&fields).is_ok());
    }

    #[test]
    fn new_password_is_checked_for_length_before_match() {
        assert_eq!(
            check_new_password("short", "other"),
            Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN))
        );
        assert_eq!(
            check_new_password("long enough", "long enougH"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(check_new_password("long enough", "long enough").is_ok());
    }

    #[test]
    fn only_entry_forms_ask_for_email() {
        assert!(AuthForm::ResetRequest.asks_for_email());
        assert!(!AuthForm::OtpReset.asks_for_email());
        assert!(!AuthForm::NewPassword.asks_for_email());
        assert!(AuthForm::NewPassword.asks_for_password());
    }
}
