#![allow(dead_code)]

use mockall::mock;
use qgen_bootstrap::entities::invocation::{CommandOutput, CommandStatus, Invocation};
use qgen_bootstrap::error::Result;
use qgen_bootstrap::service::{CommandRunner, ModelHub, Prompt};
use qgen_bootstrap::utils::config::{AppConfig, ModelConfig};
use qgen_bootstrap::Locales;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

mock! {
    pub Confirm {}
    impl Prompt for Confirm {
        fn confirm(&self, question: &str) -> Result<bool>;
    }
}

mock! {
    pub Hub {}
    impl ModelHub for Hub {
        fn fetch_tokenizer(&self, model: &ModelConfig, cache_dir: &Path) -> Result<Vec<PathBuf>>;
        fn fetch_model(&self, model: &ModelConfig, cache_dir: &Path) -> Result<Vec<PathBuf>>;
    }
}

/// Fresh directory under the system temp dir.
pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("qgen-bootstrap-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Scratch project with a requirements file, as the application repo ships.
pub fn scratch_project() -> PathBuf {
    let root = scratch_dir();
    std::fs::write(root.join("requirements.txt"), "transformers\nPyMuPDF\n").unwrap();
    root
}

pub fn test_locales() -> Locales {
    let mut locales = Locales::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")).unwrap();
    locales.set_default("en").unwrap();
    locales
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.download.verify = false;
    config
}

/// Records every invocation and plays the part of python and pip.
///
/// `python -m venv <dir>` creates `<dir>` so later runs see an existing
/// environment. Invocations whose rendered command line contains one of
/// `failing` exit with code 1; those matching `missing` cannot be launched.
pub struct FakeRunner {
    pub interpreters: Vec<(String, String)>,
    pub failing: Vec<String>,
    pub missing: Vec<String>,
    pub calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn with_python() -> Self {
        Self {
            interpreters: vec![("python3".to_string(), "Python 3.11.4".to_string())],
            failing: Vec::new(),
            missing: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without_python() -> Self {
        Self {
            interpreters: Vec::new(),
            failing: Vec::new(),
            missing: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, fragment: &str) -> Self {
        self.failing.push(fragment.to_string());
        self
    }

    /// Launching an invocation containing `fragment` fails as if the program did not exist.
    pub fn missing_program(mut self, fragment: &str) -> Self {
        self.missing.push(fragment.to_string());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    pub fn count_containing(&self, fragment: &str) -> usize {
        self.commands().iter().filter(|c| c.contains(fragment)).count()
    }

    fn exit_for(&self, invocation: &Invocation) -> CommandStatus {
        let rendered = invocation.to_string();
        if self.failing.iter().any(|f| rendered.contains(f.as_str())) {
            CommandStatus::from_code(1)
        } else {
            CommandStatus::from_code(0)
        }
    }
}

impl CommandRunner for FakeRunner {
    fn status(&self, invocation: &Invocation) -> io::Result<CommandStatus> {
        self.calls.borrow_mut().push(invocation.clone());
        let rendered = invocation.to_string();
        if self.missing.iter().any(|m| rendered.contains(m.as_str())) {
            return Err(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", rendered)));
        }
        let status = self.exit_for(invocation);

        if status.success() && invocation.args.len() == 3 && invocation.args[..2] == ["-m", "venv"] {
            let venv = PathBuf::from(&invocation.args[2]);
            std::fs::create_dir_all(venv.join("bin"))?;
        }
        Ok(status)
    }

    fn output(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        let program = invocation.program_name();
        match self.interpreters.iter().find(|(name, _)| *name == program) {
            Some((_, version)) => Ok(CommandOutput {
                status: CommandStatus::from_code(0),
                stdout: format!("{}\n", version),
                stderr: String::new(),
            }),
            None => Err(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", program))),
        }
    }
}

pub fn fake_files(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| root.join("models").join(name)).collect()
}
