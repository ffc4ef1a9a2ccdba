pub mod language;
pub mod overlay;
pub mod request;
pub mod result;

pub use language::Language;
pub use overlay::{
    BaseMap, ControlHandle, ControlPosition, LatLng, Layer, LayerHandle, LayerKind,
    LegendControl, LegendEntry, PathStyle, Popup, PopupEntry, StyledFeature,
};
pub use request::{AnalysisForm, AnalysisRequest};
pub use result::{
    AnalysisResult, ArtifactKind, Downloads, HexInfo, LegendItem, MapInfo, MetricsSummary,
};
