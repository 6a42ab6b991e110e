use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WalletPanelProps {
    pub username: String,
    pub balance: f64,
    /// Emits the raw amount string as typed
    pub on_add_funds: Callback<String>,
}

#[function_component(WalletPanel)]
pub fn wallet_panel(props: &WalletPanelProps) -> Html {
    let amount_ref = use_node_ref();

    let on_click = {
        let amount_ref = amount_ref.clone();
        let on_add_funds = props.on_add_funds.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = amount_ref.cast::<HtmlInputElement>() {
                on_add_funds.emit(input.value());
            }
        })
    };

    html! {
        <div class="wallet-panel">
            <h3>{format!("{}'s Wallet Balance: ${}", props.username, props.balance)}</h3>
            <input
                type="number"
                id="add-funds-amount"
                placeholder="Enter amount to add"
                ref={amount_ref}
            />
            <button onclick={on_click}>{"Add Funds"}</button>
        </div>
    }
}
