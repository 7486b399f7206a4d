use crate::constants::{
    ENVELOPE_COLOR, SUMMARY_INTRODUCED_COLOR, SUMMARY_INVASIVE_COLOR, SUMMARY_NATIVE_COLOR,
    SUMMARY_UNCERTAIN_COLOR,
};
use crate::kind::LayerKind;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// One titled block of color keys in `#legend`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendSection {
    pub title: &'static str,
    pub entries: SmallVec<[LegendEntry; 4]>,
}

const fn entry(label: &'static str, color: &'static str) -> LegendEntry {
    LegendEntry { label, color }
}

/// Legend shown alongside a layer, if that kind has one.
pub fn section_for(kind: LayerKind) -> Option<LegendSection> {
    match kind {
        LayerKind::Envelope => Some(LegendSection {
            title: "Envelopes",
            entries: smallvec![entry("thermal", ENVELOPE_COLOR)],
        }),
        LayerKind::Summary => Some(LegendSection {
            title: "WoRMS",
            entries: smallvec![
                entry("native", SUMMARY_NATIVE_COLOR),
                entry("introduced", SUMMARY_INTRODUCED_COLOR),
                entry("invasive", SUMMARY_INVASIVE_COLOR),
                entry("uncertain", SUMMARY_UNCERTAIN_COLOR),
            ],
        }),
        LayerKind::Density | LayerKind::Distribution => None,
    }
}
