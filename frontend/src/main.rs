fn main() {
    #[cfg(target_arch = "wasm32")]
    espoint_admin::start();
}
