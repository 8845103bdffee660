use curlkit::status::ExitStatus;

fn main() -> ExitStatus {
    curlkit::core::run(std::env::args_os())
}
