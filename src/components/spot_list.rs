use std::collections::HashSet;

use yew::prelude::*;

use crate::components::SpotCard;
use crate::models::PricedSpot;

#[derive(Properties, PartialEq, Clone)]
pub struct SpotListProps {
    pub spots: Vec<PricedSpot>,
    pub is_admin: bool,
    pub pending: HashSet<i64>,
    pub on_reserve: Callback<i64>,
    pub on_release: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(SpotList)]
pub fn spot_list(props: &SpotListProps) -> Html {
    html! {
        <div class="spot-board">
            {
                props.spots.iter().map(|spot| {
                    html! {
                        <SpotCard
                            key={spot.id}
                            spot={spot.clone()}
                            is_admin={props.is_admin}
                            pending={props.pending.contains(&spot.id)}
                            on_reserve={props.on_reserve.clone()}
                            on_release={props.on_release.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
