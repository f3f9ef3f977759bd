use anyhow::Result;

mod app;
mod form;
mod input;
mod modal;
mod view;

use app::App;
use form::{CreateForm, FormField};
use input::Input;
use modal::{Modal, ModalKind};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
