pub mod axis;
pub mod issuance;
pub mod primitives;
pub mod rasterizer;
pub mod sampler;
pub mod scale;
pub mod trend;
pub mod types;

pub use axis::{AxisTick, DayAxis, OutOfRangePolicy, ValueAxis};
pub use issuance::{
    IssuanceState, block_reward, cumulative_supply, stock_to_flow, valuation_model,
};
pub use primitives::{
    date_to_day_offset, day_offset_to_date, day_offset_to_fractional_year, genesis_date,
};
pub use rasterizer::{BandPixel, BandStyle, Segment, paint_band, rasterize};
pub use sampler::{PriceSeries, SamplingMode, sample, sample_columns};
pub use scale::{ScaleKind, apply_scale};
pub use trend::trend;
pub use types::{PixelPoint, PlotArea, Sample};
