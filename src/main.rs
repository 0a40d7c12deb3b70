use insurance_dashboard::App;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting insurance dashboard");
    dioxus::launch(App);
}
