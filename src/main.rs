//! HP-35 Simulator - CLI Entry Point
//!
//! Commands:
//! - `hp35-emu canon <A> <B>` - Canonicalize a register pair
//! - `hp35-emu render <regfile>` - Render a register image as a display
//! - `hp35-emu panel [regfile]` - Interactive front panel
//! - `hp35-emu test` - Built-in self-test

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hp35-emu")]
#[command(version = "0.1.0")]
#[command(about = "A binary-coded decimal simulator of the HP-35 (1972) scientific calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize two raw registers into the display register
    Canon {
        /// Register A: raw mantissa, 14 decimal digits
        a: String,
        /// Register B: display mask, 14 decimal digits
        b: String,
        /// Emit the resulting state as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Load a register file, canonicalize, and render the display
    Render {
        /// Path to the register file
        regfile: String,
        /// Emit the resulting state as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Interactive front panel
    Panel {
        /// Register file to pre-load
        regfile: Option<String>,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Canon { a, b, json }) => {
            run_canon(&a, &b, json);
        }
        Some(Commands::Render { regfile, json }) => {
            run_render(&regfile, json);
        }
        Some(Commands::Panel { regfile }) => {
            run_panel(regfile.as_deref());
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("HP-35 Simulator v0.1.0");
            println!("A binary-coded decimal calculator core");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_decimal_primitives();
        }
    }
}

fn run_canon(a: &str, b: &str, json: bool) {
    use hp35::{canonicalize, CpuState, RegId, Register};

    let a = match Register::from_decimal_string(a) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("❌ Bad register A: {}", e);
            std::process::exit(1);
        }
    };
    let b = match Register::from_decimal_string(b) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("❌ Bad register B: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = CpuState::new();
    state.set(RegId::A, a);
    state.set(RegId::B, b);
    canonicalize(&mut state);

    if json {
        match serde_json::to_string_pretty(&state) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("❌ JSON error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let layout = state.layout();
    println!("A: {}", state.get(RegId::A));
    println!("B: {}", state.get(RegId::B));
    println!("C: {}", state.get(RegId::X));
    println!();
    println!("Mantissa digits: {}", layout.mantissa_digits);
    match layout.point {
        Some(p) => println!("Point after digit: {}", p),
        None => println!("Point after digit: (none)"),
    }
    println!("Exponent visible: {}", layout.exponent_visible);
}

fn run_render(path: &str, json: bool) {
    use hp35::display::{get_masks, render_masks};
    use hp35::{canonicalize, load_regfile, CpuState};

    println!("📂 Loading: {}", path);

    let regfile = match load_regfile(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("❌ Failed to load register file: {}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Loaded {} registers", regfile.len());

    let mut state = CpuState::new();
    regfile.apply(&mut state);
    canonicalize(&mut state);

    if json {
        match serde_json::to_string_pretty(&state) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("❌ JSON error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let masks = get_masks(&state);

    println!();
    println!("━━━ Display ━━━");
    println!("{}", render_masks(&masks));
    println!();
    println!("━━━ Masks ━━━");
    let bytes: Vec<String> = masks.iter().map(|m| format!("{:02X}", m.bits())).collect();
    println!("{}", bytes.join(" "));
}

fn run_panel(path: Option<&str>) {
    use hp35::load_regfile;

    let initial = match path {
        Some(path) => match load_regfile(path) {
            Ok(f) => {
                println!("📂 Loaded {} registers", f.len());
                Some(f)
            }
            Err(e) => {
                eprintln!("❌ Failed to load register file: {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    println!("🚀 Launching front panel...");
    println!();

    if let Err(e) = hp35::tui::run_panel(initial) {
        eprintln!("❌ Panel error: {}", e);
        std::process::exit(1);
    }
}

fn demo_decimal_primitives() {
    use hp35::display::{display_text, get_masks, render_masks};
    use hp35::{canonicalize, CpuState, Digit, RegId, Register};

    println!("━━━ BCD Register Demo ━━━");
    println!();

    println!("Digits (single BCD nibbles):");
    let seven = Digit::from_u8(7);
    println!("  7 ten's complement: {}", seven.tens_complement());
    println!("  7 nine's complement: {}", seven.nines_complement());
    println!();

    println!("Registers (14 digits: sign, 10-digit mantissa, 3-digit exponent):");
    let r = Register::from_decimal_string("01000000000002").unwrap();
    println!("  \"01000000000002\" parses as {:?}", r);
    println!();

    println!("Canonicalization (the \"100.\" case):");
    let mut state = CpuState::new();
    state.set(RegId::A, r);
    state.set(
        RegId::B,
        Register::from_decimal_string("00029999999999").unwrap(),
    );
    canonicalize(&mut state);
    let masks = get_masks(&state);
    println!("  C = {}", state.get(RegId::X));
    println!("  display reads \"{}\"", display_text(&masks).trim());
    println!("{}", render_masks(&masks));
    println!();

    println!("✓ Core decimal primitives working!");
}

fn run_self_test() {
    use hp35::display::{get_masks, test_pattern, SegmentMask};
    use hp35::{canonicalize, CpuState, Digit, DisplayLayout, RegId, Register, DOCUMENTED_CASES};

    println!("━━━ HP-35 Simulator Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Register string roundtrip
    print!("Register decimal-string roundtrip... ");
    let mut ok = true;
    for s in ["00000000000000", "91234567890912", "01000000000002"] {
        let r = Register::from_decimal_string(s).unwrap();
        if r.to_decimal_string() != s {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: The four documented format cases
    print!("Documented canonicalization cases... ");
    ok = true;
    for case in DOCUMENTED_CASES {
        let mut state = CpuState::new();
        state.set(RegId::A, Register::from_decimal_string(case.a).unwrap());
        state.set(RegId::B, Register::from_decimal_string(case.b).unwrap());
        canonicalize(&mut state);
        if state.get(RegId::X).to_decimal_string() != case.c {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 3: Ten's complement identity
    print!("Ten's complement identity... ");
    ok = true;
    for d in Digit::ALL {
        if (d.to_u8() + d.tens_complement().to_u8()) % 10 != 0 {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: Power-on canonicalization shows zero
    print!("Power-on display is zero... ");
    let mut state = CpuState::new();
    canonicalize(&mut state);
    if state.get(RegId::X) == Register::zero() && state.layout().mantissa_digits == 1 {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 5: Decoder reproduces the fixture
    print!("Decoder reproduces test pattern... ");
    let mut state = CpuState::new();
    state.set(
        RegId::X,
        Register::from_decimal_string("91234567890099").unwrap(),
    );
    state.set_layout(DisplayLayout {
        mantissa_digits: 10,
        point: Some(1),
        exponent_visible: true,
    });
    if get_masks(&state) == test_pattern() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 6: Digit masks unique and non-zero
    print!("Digit masks unique and non-zero... ");
    ok = true;
    for (i, a) in SegmentMask::DIGITS.iter().enumerate() {
        if a.bits() == 0 {
            ok = false;
        }
        for b in &SegmentMask::DIGITS[i + 1..] {
            if a == b {
                ok = false;
            }
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
