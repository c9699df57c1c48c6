fn main() {
    freeze_build::app::cli::run();
}
