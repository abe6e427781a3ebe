// App lifecycle: splash redirect, login, and the authenticated screening session

pub mod screening;
pub mod shell;
pub mod splash;

pub use screening::{Collaborators, ScreeningError, ScreeningSession, SessionSettings};
pub use shell::{AppShell, ShellError, ShellPhase};
pub use splash::SplashGate;
