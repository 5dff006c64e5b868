use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::{ShotForm, WindDirection, coerce_number};
use crate::mvu::selector::SelectorModel;
use crate::view::bag_editor::render_bag_editor;
use crate::view::results::render_results;

pub const INDEX_TITLE: &str = "Golf Club Selector";

#[must_use]
pub fn render_index_template(model: &SelectorModel) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (INDEX_TITLE) }
            script src=(HTMX_PATH) defer integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" crossorigin="anonymous" {}
        }
        body {
            div class="page" {
                header {
                    h1 { (INDEX_TITLE) }
                }
                (render_shot_form(model))
                div id="results" {
                    (render_results(model))
                }
                (render_bag_editor(&model.bag, model.show_editor))
            }
        }
    }
}

/// Inputs are staged in the form and only committed when Recalculate is pressed.
#[must_use]
pub fn render_shot_form(model: &SelectorModel) -> Markup {
    let staged = &model.staged;
    let wind_dir = WindDirection::from_code_or_default(&staged.wind_dir);
    html! {
        form id="shot-form" class="grid-2" hx-post="recalculate" hx-target="#results" hx-swap="innerHTML" {
            section class="card" {
                h2 { "Shot" }
                label for="distance" { "Target distance (m)" }
                input type="number" id="distance" name="distance" min="0" max="400" value=(staged.distance);

                label for="elevation" { "Elevation change (m)" }
                input type="range" id="elevation" name="elevation" min="-30" max="30" step="1" value=(staged.elevation)
                    hx-post="stage" hx-trigger="input" hx-swap="none";
                (render_elevation_readout(staged, false))
            }
            section class="card" {
                h2 { "Wind" }
                p class="muted small" {
                    "Arrows show the way the wind is blowing. You are hitting toward the TOP of the screen."
                }
                fieldset class="wind-directions" {
                    legend { "Direction" }
                    @for d in WindDirection::ALL {
                        label class="wind-dir" title=(format!("{} {}", d.arrow(), d.label())) {
                            input type="radio" name="wind_dir" value=(d.code()) checked[d == wind_dir];
                            span class="arrow" { (d.arrow()) }
                        }
                    }
                }
                label for="wind_speed" { "Speed (m/s)" }
                input type="range" id="wind_speed" name="wind_speed" min="0" max="20" step="1" value=(staged.wind_speed)
                    hx-post="stage" hx-trigger="input" hx-swap="none";
                (render_wind_speed_readout(staged, false))
            }
            button type="submit" class="primary-action" { "Recalculate" }
        }
    }
}

#[must_use]
pub fn render_elevation_readout(staged: &ShotForm, oob: bool) -> Markup {
    let elevation = coerce_number(&staged.elevation);
    html! {
        div id="elevation-readout" class="muted small" hx-swap-oob=[oob.then_some("true")] {
            (staged.elevation) " m ("
            @if elevation >= 0.0 { "+ uphill" } @else { "- downhill" }
            ")"
        }
    }
}

#[must_use]
pub fn render_wind_speed_readout(staged: &ShotForm, oob: bool) -> Markup {
    html! {
        div id="wind-speed-readout" class="muted small" hx-swap-oob=[oob.then_some("true")] {
            (staged.wind_speed) " m/s"
        }
    }
}

/// Slider readouts, swapped out of band after any request that stages the form.
#[must_use]
pub fn render_staged_readouts(staged: &ShotForm) -> Markup {
    html! {
        (render_elevation_readout(staged, true))
        (render_wind_speed_readout(staged, true))
    }
}
