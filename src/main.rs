fn main() {
    assetkit::app::cli::run();
}
