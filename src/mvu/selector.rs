use serde::Serialize;

use crate::error::SelectorError;
use crate::model::{Bag, ShotForm, ShotInputs, parse_carry};
use crate::selection::{DistanceBreakdown, Recommendation, Tuning, breakdown_for_shot, recommend};

/// Everything the page shows, as one value. `update` never edits it in place;
/// it hands back the next snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorModel {
    pub staged: ShotForm,
    pub shot: ShotInputs,
    pub bag: Bag,
    pub tuning: Tuning,
    pub show_editor: bool,
    pub breakdown: Option<DistanceBreakdown>,
    pub recommendation: Option<Recommendation>,
    pub error: Option<SelectorError>,
}

impl Default for SelectorModel {
    fn default() -> Self {
        Self::new(Bag::default(), Tuning::default())
    }
}

impl SelectorModel {
    #[must_use]
    pub fn new(bag: Bag, tuning: Tuning) -> Self {
        let shot = ShotInputs::default();
        Self {
            staged: ShotForm::from(&shot),
            shot,
            bag,
            tuning,
            show_editor: false,
            breakdown: None,
            recommendation: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    PageLoad,
    StageShot(ShotForm),
    Recalculate,
    EditCarry { key: String, carry: String },
    ToggleEditor,
    DistanceComputed(DistanceBreakdown),
    Recommended(Recommendation),
    Failed(SelectorError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ComputeDistance,
    Recommend,
}

#[must_use]
pub fn update(model: &SelectorModel, msg: Msg) -> (SelectorModel, Vec<Effect>) {
    match msg {
        Msg::PageLoad => (model.clone(), vec![Effect::ComputeDistance]),
        Msg::StageShot(staged) => (
            SelectorModel {
                staged,
                ..model.clone()
            },
            vec![],
        ),
        Msg::Recalculate => (
            SelectorModel {
                shot: model.staged.commit(),
                ..model.clone()
            },
            vec![Effect::ComputeDistance],
        ),
        Msg::EditCarry { key, carry } => {
            let bag = model.bag.with_carry(&key, parse_carry(&carry));
            let effects = if model.breakdown.is_some() {
                vec![Effect::Recommend]
            } else {
                vec![Effect::ComputeDistance]
            };
            (SelectorModel { bag, ..model.clone() }, effects)
        }
        Msg::ToggleEditor => (
            SelectorModel {
                show_editor: !model.show_editor,
                ..model.clone()
            },
            vec![],
        ),
        Msg::DistanceComputed(breakdown) => (
            SelectorModel {
                breakdown: Some(breakdown),
                ..model.clone()
            },
            vec![Effect::Recommend],
        ),
        Msg::Recommended(recommendation) => (
            SelectorModel {
                recommendation: Some(recommendation),
                error: None,
                ..model.clone()
            },
            vec![],
        ),
        Msg::Failed(e) => (
            SelectorModel {
                recommendation: None,
                error: Some(e),
                ..model.clone()
            },
            vec![],
        ),
    }
}

#[must_use]
pub fn run_effect(effect: Effect, model: &SelectorModel) -> Msg {
    match effect {
        Effect::ComputeDistance => {
            Msg::DistanceComputed(breakdown_for_shot(&model.tuning, &model.shot))
        }
        Effect::Recommend => match model.breakdown {
            Some(breakdown) => match recommend(&model.bag, breakdown.effective_distance) {
                Ok(recommendation) => Msg::Recommended(recommendation),
                Err(e) => Msg::Failed(e),
            },
            None => Msg::Failed(SelectorError::Other(
                "Recommend requested before distance was computed".into(),
            )),
        },
    }
}

/// What `?json=1` and the `recommend` subcommand print.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectionReport {
    pub shot: ShotInputs,
    pub breakdown: Option<DistanceBreakdown>,
    pub recommendation: Option<Recommendation>,
    pub error: Option<String>,
}

impl From<&SelectorModel> for SelectionReport {
    fn from(model: &SelectorModel) -> Self {
        Self {
            shot: model.shot,
            breakdown: model.breakdown,
            recommendation: model.recommendation.clone(),
            error: model.error.as_ref().map(ToString::to_string),
        }
    }
}
