#![allow(non_snake_case)]

fn main() {
    dioxus::launch(meetmap::client::App);
}
