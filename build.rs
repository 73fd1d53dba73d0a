use std::fs;
use std::path::Path;

fn main() {
    generate_build_info();

    #[cfg(windows)]
    {
        if Path::new("assets/exe_icon.ico").exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("assets/exe_icon.ico");
            res.set("FileDescription", "Capture - screenshot annotation");
            res.set("ProductName", "Capture");
            res.set("OriginalFilename", "capture-lang.exe");

            if let Err(e) = res.compile() {
                println!("cargo:warning=Failed to compile Windows resources: {}", e);
            }
        }
    }
}

fn generate_build_info() {
    // .build_number holds "<date>_<number>", maintained outside cargo
    let build_file = Path::new(".build_number");
    let (date, build_num) = if build_file.exists() {
        let content = fs::read_to_string(build_file).unwrap_or_default();
        let parts: Vec<&str> = content.trim().split('_').collect();
        if parts.len() == 2 {
            (parts[0].to_string(), parts[1].parse::<u32>().unwrap_or(1))
        } else {
            ("unknown".to_string(), 1)
        }
    } else {
        ("unknown".to_string(), 1)
    };

    println!("cargo:rustc-env=BUILD_INFO=build{}_{}", date, build_num);
    println!("cargo:rerun-if-changed=.build_number");
}
