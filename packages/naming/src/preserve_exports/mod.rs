// Preserve Exports
//
// Keeps exports that are only accessed by name through tree-shaking and
// export mangling.

pub mod plugin;
pub mod registry;
pub mod usage;

pub use plugin::{collect_export_overrides, PreserveExportsPlugin};
pub use registry::{ExportOverrideRegistry, OverriddenUsage};
pub use usage::{ExportUsage, UsageTable, UsedName};
