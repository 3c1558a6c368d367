#![deny(clippy::all)]

use napi::{Error, Result, Status};
use napi_derive::napi;
use std::rc::Rc;

use module_naming::logging::{ConsoleLogger, LogLevel, Logger, NullLogger};
use module_naming::RunMode;

/// Module naming for Node hosts: takes a build manifest, returns the report.
#[napi]
pub struct ModuleNaming {
    verbose: bool,
}

#[napi]
impl ModuleNaming {
    #[napi(constructor)]
    pub fn new(verbose: Option<bool>) -> Self {
        ModuleNaming {
            verbose: verbose.unwrap_or(false),
        }
    }

    /// Name the preserved modules of `manifest_json`. `dll` forces a
    /// link-library build; otherwise the manifest decides.
    #[napi]
    pub fn resolve(&self, manifest_json: String, dll: Option<bool>) -> Result<String> {
        let logger: Rc<dyn Logger> = if self.verbose {
            Rc::new(ConsoleLogger::new("module-naming", LogLevel::Debug))
        } else {
            Rc::new(NullLogger::new())
        };
        let run_mode = dll.and_then(|dll| dll.then_some(RunMode::Dll));

        module_naming_cli::run_json(&manifest_json, run_mode, logger)
            .map_err(|e| Error::new(Status::GenericFailure, format!("{:#}", e)))
    }

    #[napi]
    pub fn version(&self) -> String {
        module_naming::version().to_string()
    }
}
