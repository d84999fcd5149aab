use clap::Parser;
use dmc::app::{DmcApp, DmcAppError};

fn main() -> Result<(), DmcAppError> {
    env_logger::init();
    let args = DmcApp::parse();
    args.op.run()
}
