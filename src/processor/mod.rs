//! Processors: the only code that touches host representations.
//!
//! ## Contracts
//!
//! - [`ValueProcessor`]: One key's read/write rule, keyed by [`Key`](crate::key::Key)
//! - [`ManipulatorProcessor`]: One facet's materialize/apply/remove rules,
//!   keyed by the facet type
//! - [`DataPriority`]: Who wins when facet and host disagree
//!
//! ## Built-in Processors
//!
//! | Facet | Key | Hosts |
//! |-------|-----|-------|
//! | `VelocityData` | `VELOCITY` | `Entity` |
//! | `SignData` | `SIGN_LINES` | `SignTile` |
//! | `PortionData` | `PORTION_TYPE` | `BlockState` with a portion |
//! | `DirectionalData` | `DIRECTION` | `BlockState` with a facing |
//! | `DoublePlantData` | `DOUBLE_PLANT_TYPE` | `BlockState` of a double plant |

mod directional;
mod double_plant;
mod manipulator;
mod portion;
mod priority;
mod sign;
mod value;
mod velocity;

pub use directional::{DirectionValueProcessor, DirectionalDataProcessor};
pub use double_plant::{DoublePlantDataProcessor, DoublePlantTypeValueProcessor};
pub use manipulator::ManipulatorProcessor;
pub use portion::{PortionDataProcessor, PortionValueProcessor};
pub use priority::DataPriority;
pub use sign::{SignDataProcessor, SignLinesValueProcessor};
pub use value::ValueProcessor;
pub use velocity::{VelocityDataProcessor, VelocityValueProcessor};

use tracing::trace;

use crate::transaction::DataTransactionResult;

/// Log the outcome of a `set_data` call and pass it through.
pub(crate) fn traced(
    facet: &'static str,
    host: &'static str,
    result: DataTransactionResult,
) -> DataTransactionResult {
    trace!(
        domain = "processor",
        facet,
        host,
        outcome = %result.kind(),
        replaced = result.replaced().len(),
        rejected = result.rejected().len(),
        "set_data"
    );
    result
}
