//! Flow plugins
//!
//! Each plugin is a pure function of its arguments: it reads the file's
//! streams and the user's options and returns a routing decision with the
//! (possibly updated) engine state.

pub mod check_stream_property;
pub mod rename_metadata;

use crate::host::{InputLoader, JobLog, PluginArgs, PluginDetails, PluginOutput};
use crate::template::GrammarSelection;

pub use check_stream_property::CheckStreamProperty;
pub use rename_metadata::RenameStreamsMetadata;

/// A flow plugin
pub trait Plugin {
    /// Registry id, e.g. `checkDetailedStreamProperty`
    fn id(&self) -> &'static str;

    /// Schema shown in the flow editor
    fn details(&self) -> PluginDetails;

    /// Run the plugin. Never fails: problems are reported through `log` and
    /// an appropriate output number.
    fn run(&self, args: PluginArgs, loader: &dyn InputLoader, log: &mut dyn JobLog)
        -> PluginOutput;
}

/// Every plugin in this crate
pub fn all_plugins(grammar: GrammarSelection) -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(CheckStreamProperty),
        Box::new(RenameStreamsMetadata::new(grammar)),
    ]
}

/// Look a plugin up by id
pub fn find_plugin(id: &str, grammar: GrammarSelection) -> Option<Box<dyn Plugin>> {
    all_plugins(grammar).into_iter().find(|p| p.id() == id)
}
