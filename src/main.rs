fn main() {
    agent_installer::app::cli::run();
}
