mod components;

fn main() {
    dioxus::launch(components::app::App);
}
