pub mod fixtures;

pub use fixtures::FixtureLoader;

/// Loader for the fixtures shipped with this crate.
pub fn fixtures() -> FixtureLoader {
    FixtureLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))
}
