fn main() {
    std::process::exit(taskforge::app::startup::run());
}
