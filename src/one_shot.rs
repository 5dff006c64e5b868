use crate::error::SelectorError;
use crate::model::{Bag, ShotForm};
use crate::mvu::runtime::run_selector_all;
use crate::mvu::selector::{Msg, SelectionReport, SelectorModel};
use crate::selection::Tuning;

/// Run the same stage-then-recalculate flow the form does, once, without a server.
///
/// # Errors
///
/// Returns an error if the calculation loop fails for any reason other than an
/// empty bag; an empty bag is reported inside the `SelectionReport`.
pub fn run_one_shot(
    bag: Bag,
    tuning: Tuning,
    form: ShotForm,
) -> Result<SelectionReport, SelectorError> {
    let mut model = SelectorModel::new(bag, tuning);
    match run_selector_all(&mut model, [Msg::StageShot(form), Msg::Recalculate]) {
        Ok(()) | Err(SelectorError::EmptyBag) => Ok(SelectionReport::from(&model)),
        Err(e) => Err(e),
    }
}
