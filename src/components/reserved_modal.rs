use yew::prelude::*;

use crate::models::ReservedSpot;

#[derive(Properties, PartialEq)]
pub struct ReservedModalProps {
    pub spots: Vec<ReservedSpot>,
    pub on_close: Callback<()>,
}

/// Read-only listing of the user's reservations. Prices are the charged
/// ones; no multiplier is re-applied here.
#[function_component(ReservedModal)]
pub fn reserved_modal(props: &ReservedModalProps) -> Html {
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let overlay_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={overlay_click}>
            <div class="modal" onclick={stop}>
                <h3>{"Reserved Spots"}</h3>
                {
                    props.spots.iter().map(|spot| {
                        html! {
                            <p key={spot.spot_id}>
                                {format!("Parking Spot {} - Price: ${}", spot.spot_id, spot.price)}
                            </p>
                        }
                    }).collect::<Html>()
                }
                <button onclick={close_click}>{"Close"}</button>
            </div>
        </div>
    }
}
