use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    pub on_create_account: Callback<(String, String)>,
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let read_credentials = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        move || -> Option<(String, String)> {
            let username = username_ref.cast::<HtmlInputElement>()?.value();
            let password = password_ref.cast::<HtmlInputElement>()?.value();
            Some((username, password))
        }
    };

    let on_submit = {
        let read_credentials = read_credentials.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(credentials) = read_credentials() {
                on_login.emit(credentials);
            }
        })
    };

    let on_create = {
        let on_create_account = props.on_create_account.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(credentials) = read_credentials() {
                on_create_account.emit(credentials);
            }
        })
    };

    html! {
        <div class="login-box">
            <form onsubmit={on_submit}>
                <input
                    type="text"
                    id="username"
                    placeholder="Username"
                    ref={username_ref}
                /><br />
                <input
                    type="password"
                    id="password"
                    placeholder="Password"
                    ref={password_ref}
                /><br />
                <button type="submit">{"Login"}</button>
                <button type="button" onclick={on_create}>{"Create Account"}</button>
                {
                    if let Some(error) = &props.error {
                        html! { <p class="login-error">{error}</p> }
                    } else {
                        html! {}
                    }
                }
            </form>
        </div>
    }
}
