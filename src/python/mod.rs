//! Python bindings for the Sorry! agent codec.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import sorry_agent as sa
//!
//! encoder = sa.ObservationEncoder()
//! obs = encoder.encode([0, 0, 1, 2, 4], [0, 0, 0, 0])  # float32[323]
//!
//! codec = sa.ActionSpaceCodec("yellow", [0, 0, 0, 0])
//! action = codec.decode(11)  # leave Start with a One
//!
//! agent = sa.Agent(lambda obs: np.random.rand(codec.total_action_count))
//! action = agent.get_action([0, 0, 1, 2, 4], [0, 0, 0, 0])
//! ```

use pyo3::prelude::*;

mod py_codec;
mod py_core;
mod py_nn;

pub use py_codec::*;
pub use py_core::*;
pub use py_nn::*;

/// sorry_agent: observation encoding and action decoding for Sorry!.
#[pymodule]
fn sorry_agent(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyAction>()?;

    // Codec
    m.add_class::<PyObservationEncoder>()?;
    m.add_class::<PyActionSpaceCodec>()?;

    // Agent
    m.add_class::<PyAgent>()?;

    Ok(())
}
