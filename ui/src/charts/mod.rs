//! SVG charts for the dashboard. Geometry is computed in [`geometry`];
//! components only lay out the resulting shapes.

pub mod geometry;

mod line;
pub use line::LineChart;

mod pie;
pub use pie::PieChart;
