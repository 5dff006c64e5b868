use maud::{Markup, html};

use crate::model::Bag;

pub const MIN_CARRY_HINT: u32 = 30;
pub const MAX_CARRY_HINT: u32 = 350;

/// The toggle button plus, when open, one carry input per club.
/// Swapped as a whole by `editor/toggle`.
#[must_use]
pub fn render_bag_editor(bag: &Bag, show_editor: bool) -> Markup {
    html! {
        section id="bag-editor" class="card" {
            button class="toggle" hx-post="editor/toggle" hx-target="#bag-editor" hx-swap="outerHTML" {
                @if show_editor { "Close Bag Editor" } @else { "Edit My Bag Distances" }
            }
            @if show_editor {
                h2 { "My Bag Distances (carry in meters)" }
                div class="grid-2" {
                    @for club in bag.clubs() {
                        form class="club-row" hx-post=(format!("bag/{}", club.key)) hx-trigger="change" hx-target="#results" hx-swap="innerHTML" {
                            label for=(format!("carry-{}", club.key)) { (club.label) }
                            input type="number" id=(format!("carry-{}", club.key)) name="carry"
                                value=(club.carry) min=(MIN_CARRY_HINT) max=(MAX_CARRY_HINT) step="1";
                        }
                    }
                }
            }
        }
    }
}
