mod store;

pub use store::SavedTargets;
