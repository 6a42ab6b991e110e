use yew::prelude::*;

use crate::models::PricedSpot;

#[derive(Properties, PartialEq, Clone)]
pub struct SpotCardProps {
    pub spot: PricedSpot,
    pub is_admin: bool,
    /// Reservation request in flight for this spot
    #[prop_or(false)]
    pub pending: bool,
    pub on_reserve: Callback<i64>,
    pub on_release: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(SpotCard)]
pub fn spot_card(props: &SpotCardProps) -> Html {
    let spot = &props.spot;

    let card_classes = classes!(
        "spot-card",
        spot.reserved.then_some("reserved"),
        props.is_admin.then_some("compact"),
    );

    let status = if spot.reserved {
        if props.is_admin {
            format!("Reserved by {}", spot.user.as_deref().unwrap_or("N/A"))
        } else {
            "Reserved".to_string()
        }
    } else {
        "Available".to_string()
    };
    let status_class = if spot.reserved { "spot-status reserved" } else { "spot-status available" };

    let on_reserve_click = {
        let cb = props.on_reserve.clone();
        let id = spot.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let on_release_click = {
        let cb = props.on_release.clone();
        let id = spot.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let on_delete_click = {
        let cb = props.on_delete.clone();
        let id = spot.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    html! {
        <div class={card_classes}>
            <h3>{format!("Spot {}", spot.id)}</h3>
            <p>{"Original Price: "}<del>{format!("${:.2}/hr", spot.base_price)}</del></p>
            <p class="spot-price">{format!("Current Price: ${:.2}/hr", spot.current_price)}</p>
            <p class={status_class}>{format!("Status: {}", status)}</p>
            {
                if props.is_admin {
                    html! {
                        <>
                            <button onclick={on_release_click}>{"Release"}</button>
                            <button onclick={on_delete_click}>{"Delete Parking Spot"}</button>
                        </>
                    }
                } else if !spot.reserved {
                    html! {
                        <button onclick={on_reserve_click} disabled={props.pending}>
                            {if props.pending { "Reserving..." } else { "Reserve" }}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
