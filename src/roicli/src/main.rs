// CLI ROI calculation
// Loads a TOML scenario and prints the ROI report
use std::io::Read;
use std::fs;
use std::env;

use roilib::cfg::RoiModel;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && args[1] == "--help" {
        println!("AI ROI Calculator");
        println!("Usage: roicli [scenario.toml]");
        println!("Reads the scenario from stdin when no file is given.");
        std::process::exit(0);
    }

    let tstr: String = if args.len() < 2 {
        let stdin = std::io::stdin();
        let mut input = String::new();
        let mut handle = stdin.lock();
        match handle.read_to_string(&mut input) {
            Ok(_) => input,
            Err(e) => { eprintln!("stdin {}", e.to_string()); std::process::exit(0); },
        }
    } else {
        match fs::read_to_string(&args[1]) {
            Ok(v) => v,
            Err(e) => { eprintln!("file {}, {}", args[1], e.to_string()); std::process::exit(0); },
        }
    };

    let model = match RoiModel::load_toml(&tstr) {
        Ok(v) => v,
        Err(e) => { eprintln!("{}", e.to_string()); std::process::exit(0); },
    };

    println!("{}", model.report());
}
