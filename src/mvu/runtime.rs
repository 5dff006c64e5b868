use serde_json::json;

use crate::error::SelectorError;
use crate::mvu::selector::{Msg, SelectorModel, run_effect, update};

/// Runs the MVU loop for the selector: seeds with `init_msg` and drains effects.
/// Each step replaces `model` with the snapshot `update` returns.
///
/// # Errors
///
/// Returns the `SelectorError` carried by the first `Msg::Failed`. The model
/// already records that error when this returns.
pub fn run_selector(model: &mut SelectorModel, init_msg: Msg) -> Result<(), SelectorError> {
    let (next_model, mut effects) = update(model, init_msg);
    *model = next_model;
    while let Some(effect) = effects.pop() {
        if cfg!(debug_assertions) {
            eprintln!(
                "{}",
                json!({"mvu":"effect_start","effect": format!("{effect:?}")})
            );
        }
        let msg = run_effect(effect, model);
        if cfg!(debug_assertions) {
            eprintln!("{}", json!({"mvu":"effect_done","msg": format!("{msg:?}")}));
        }
        match msg {
            Msg::Failed(e) => {
                *model = update(model, Msg::Failed(e.clone())).0;
                return Err(e);
            }
            other => {
                let (next_model, next) = update(model, other);
                *model = next_model;
                if cfg!(debug_assertions) {
                    eprintln!(
                        "{}",
                        json!({"mvu":"update","queued_effects": next.iter().map(|x| format!("{x:?}")).collect::<Vec<_>>()})
                    );
                }
                effects.extend(next);
            }
        }
    }
    Ok(())
}

/// Feed several messages through the loop in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first `SelectorError` raised by any message.
pub fn run_selector_all(
    model: &mut SelectorModel,
    msgs: impl IntoIterator<Item = Msg>,
) -> Result<(), SelectorError> {
    for msg in msgs {
        run_selector(model, msg)?;
    }
    Ok(())
}
