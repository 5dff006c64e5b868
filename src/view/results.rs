use maud::{Markup, html};

use crate::error::SelectorError;
use crate::mvu::selector::SelectorModel;
use crate::selection::{ClubPick, Recommendation, Tuning};
use crate::view::format::{format_meters, format_pct, format_signed_meters};

#[must_use]
pub fn render_results(model: &SelectorModel) -> Markup {
    html! {
        (render_breakdown(model))
        (render_recommendation(model.recommendation.as_ref(), model.error.as_ref(), &model.tuning))
    }
}

#[must_use]
pub fn render_breakdown(model: &SelectorModel) -> Markup {
    html! {
        section class="card breakdown" {
            h2 { "Effective Yardage" }
            @if let Some(breakdown) = &model.breakdown {
                div class="grid-3" {
                    div class="stat" id="raw-distance" {
                        div class="stat-label" { "Raw distance" }
                        div class="stat-value" { (format_meters(model.shot.distance)) }
                    }
                    div class="stat" id="wind-adjustment" {
                        div class="stat-label" { "Wind adjustment" }
                        div class="stat-value" { (format_signed_meters(breakdown.wind_adjustment)) }
                    }
                    div class="stat" id="elevation-adjustment" {
                        div class="stat-label" { "Elevation adjustment" }
                        div class="stat-value" { (format_signed_meters(breakdown.elevation_adjustment)) }
                    }
                }
                div class="plays-as" {
                    "Plays as "
                    span id="effective-distance" class="strong" { (format_meters(breakdown.effective_distance)) }
                }
            } @else {
                p class="muted" { "Press Recalculate to work out the shot." }
            }
            p class="muted small" {
                "Tip: change the inputs, then press "
                span class="strong" { "Recalculate" }
                " to update the recommendation."
            }
        }
    }
}

#[must_use]
pub fn render_recommendation(
    recommendation: Option<&Recommendation>,
    error: Option<&SelectorError>,
    tuning: &Tuning,
) -> Markup {
    html! {
        section class="card recommendation" {
            h2 { "Recommendation" }
            @match error {
                Some(SelectorError::EmptyBag) => {
                    div class="warning" id="empty-bag" {
                        "No clubs available. Add some carry distances to your bag."
                    }
                },
                Some(e) => {
                    div class="warning" id="selector-error" { (e.to_string()) }
                },
                None => {
                    @if let Some(rec) = recommendation {
                        @if rec.needs_more_than_longest {
                            div class="warning" id="too-long" {
                                "This shot plays longer than your longest club. Consider laying up or a different strategy."
                            }
                        } @else {
                            div class="rec-grid" {
                                (render_primary(&rec.primary))
                                div class="alternatives" {
                                    @for alt in &rec.alternatives {
                                        (render_alternative(alt))
                                    }
                                }
                            }
                        }
                    }
                }
            }
            p class="muted small notes" { (tuning_notes(tuning)) }
        }
    }
}

fn render_primary(pick: &ClubPick) -> Markup {
    html! {
        div class="primary" data-club=(pick.club.key) {
            div class="muted small" { "Primary" }
            div class="club-name" { (pick.club.label) }
            div class="swing" {
                "Target swing: "
                span class="strong swing-pct" { (format_pct(pick.swing_pct)) }
                " (" span class="effort" { (pick.effort) } ")"
            }
            div class="muted small" { "Baseline carry " (format_meters(pick.club.carry)) }
        }
    }
}

fn render_alternative(pick: &ClubPick) -> Markup {
    html! {
        div class="alternative" data-club=(pick.club.key) {
            div class="muted small" { "Alternative" }
            div class="strong club-name" { (pick.club.label) }
            div class="swing" {
                span class="swing-pct" { (format_pct(pick.swing_pct)) }
                " (" span class="effort" { (pick.effort) } ")"
            }
            div class="muted small" { "Carry " (format_meters(pick.club.carry)) }
        }
    }
}

#[must_use]
pub fn tuning_notes(tuning: &Tuning) -> String {
    format!(
        "Notes: Headwind increases effective distance by ~{:.1}% per m/s; tailwind reduces by ~{:.1}% per m/s. \
         Elevation adds ~{} m per 1 m uphill and subtracts ~{} m per 1 m downhill. These are tunable heuristics.",
        tuning.headwind_factor * 100.0,
        tuning.tailwind_factor.abs() * 100.0,
        tuning.uphill_factor,
        tuning.downhill_factor,
    )
}
