// The library carries the dependencies; the binary only mounts it.
#![allow(unused_crate_dependencies)]

use fayeest_portfolio::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
