use clap::Parser;
use riskxvii::cpu::{Cpu, StepOutcome};
use riskxvii::{diagnostics, loader};
use std::io::Write;

/// Emulate a reduced 32-bit RISC-style instruction set
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the flat binary image to run
    input: String,

    /// Print the decoded fields of every instruction before executing it
    #[arg(short, long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();

    let image = match loader::load(&args.input) {
        Ok(image) => image,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let mut cpu = Cpu::new();
    cpu.instruction_memory = image.instruction_memory;
    cpu.data_memory = image.data_memory;

    let mut stdout = std::io::stdout();
    loop {
        if args.trace {
            println!("PC = 0x{:08x}", cpu.pc);
        }

        match cpu.step() {
            Ok(StepOutcome::Continue) => {
                print!("{}", cpu.take_output());
                let _ = stdout.flush();
            }
            Ok(StepOutcome::Halted) => {
                print!("{}", cpu.take_output());
                let _ = stdout.flush();
                std::process::exit(0);
            }
            Err(riskxvii::errors::Fault::Decode(e)) => {
                print!("{}", cpu.take_output());
                print!("{}", diagnostics::format_not_implemented(e.instr(), cpu.pc, &cpu.registers));
                let _ = stdout.flush();
                std::process::exit(1);
            }
            Err(riskxvii::errors::Fault::IllegalOperation { instr, .. }) => {
                print!("{}", cpu.take_output());
                print!("{}", diagnostics::format_illegal_operation(instr, cpu.pc, &cpu.registers));
                let _ = stdout.flush();
                std::process::exit(1);
            }
        }
    }
}
