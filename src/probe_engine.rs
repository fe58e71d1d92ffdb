pub use crate::features::probe::engine::{IcmpProbe, ProbeStrategy, TcpProbe};
