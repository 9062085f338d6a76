use std::env;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    if let Err(err) = toolshim_detect::run(&out_dir) {
        panic!("toolshim: {err}");
    }
}
