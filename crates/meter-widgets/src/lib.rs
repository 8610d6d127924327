//! Widgets for the meter gauge.
//!
//! [`Meter`] lays out and paints a [`meter_core::GaugeGeometry`] onto any
//! [`meter_core::Canvas`]; [`Text`] is the usual middle content.

pub mod meter;
pub mod spectrum;
pub mod text;

pub use meter::Meter;
pub use spectrum::{
    paint_indicator, paint_spectrum, ArcSpan, IndicatorLayout, SpectrumLayout, MARK_COLOR,
    TRACK_COLOR,
};
pub use text::Text;
