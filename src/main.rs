use anyhow::Context;
use clap::Parser;
use staffbook::config::cli::Command;
use staffbook::utils::error::ErrorSeverity;
use staffbook::utils::{logger, validation::Validate};
use staffbook::{
    BonusCalculator, CliConfig, ConfigProvider, DatabaseEmployeeRepository, Employee,
    EmployeeService, NewEmployee, Skill, StaffError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::debug!("Using employee store {}", config.store_path());
    let repository = DatabaseEmployeeRepository::new(config.store_path());
    let calculator = match BonusCalculator::from_config(&config) {
        Ok(calculator) => calculator,
        Err(e) => {
            tracing::error!("❌ Invalid bonus configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let service = EmployeeService::with_calculator(repository, calculator);

    if let Err(e) = run(&service, cli.command).await {
        let Some(staff_error) = e.downcast_ref::<StaffError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            staff_error,
            staff_error.category(),
            staff_error.severity()
        );
        eprintln!("❌ {}", staff_error.user_friendly_message());
        eprintln!("💡 {}", staff_error.recovery_suggestion());

        let exit_code = match staff_error.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(
    service: &EmployeeService<DatabaseEmployeeRepository>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Hire {
            name,
            salary,
            role,
            skills,
            hired_on,
        } => {
            let mut request = NewEmployee::new(name, salary)
                .with_role(role)
                .with_skills(skills.into_iter().map(Skill::new));
            request.hired_on = hired_on;

            let employee = service.hire(request).await?;
            println!("✅ Hired {} with id {}", employee.name, employee.id);
        }
        Command::Show { id } => {
            let employee = service.find(id).await?;
            print_employee(&employee);
        }
        Command::List => {
            let employees = service.roster().await?;
            if employees.is_empty() {
                println!("No employees yet");
            }
            for employee in &employees {
                println!(
                    "{:>4}  {:<24} {:<12} {:>12.2}",
                    employee.id, employee.name, employee.role, employee.salary
                );
            }
        }
        Command::Bonus { id } => {
            let employee = service.find(id).await?;
            let bonus = service.bonus_for(id).await?;
            println!("{} ({}): bonus {:.2}", employee.name, employee.role, bonus);
        }
        Command::AddSkill { id, skill } => {
            let employee = service.add_skill(id, Skill::new(skill)).await?;
            print_employee(&employee);
        }
        Command::Promote { id, role } => {
            let employee = service.change_role(id, role).await?;
            println!("✅ {} is now {}", employee.name, employee.role);
        }
        Command::Raise { id, salary } => {
            let employee = service.set_salary(id, salary).await?;
            println!("✅ {} now earns {:.2}", employee.name, employee.salary);
        }
        Command::Dismiss { id } => {
            let employee = service.dismiss(id).await?;
            println!("✅ Dismissed {} (id {})", employee.name, employee.id);
        }
        Command::Report { output } => {
            let report = service.payroll_report().await?;
            let csv = report.to_csv()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)
                        .with_context(|| format!("writing report to {}", path.display()))?;
                    tracing::info!("📁 Report saved to: {}", path.display());
                    println!(
                        "✅ {} employees, total bonus {:.2}",
                        report.lines.len(),
                        report.total_bonus
                    );
                }
                None => print!("{}", csv),
            }
        }
    }

    Ok(())
}

fn print_employee(employee: &Employee) {
    println!("id:       {}", employee.id);
    println!("name:     {}", employee.name);
    println!("role:     {}", employee.role);
    println!("salary:   {:.2}", employee.salary);
    if let Some(date) = employee.hired_on {
        println!("hired on: {}", date);
    }
    let skills: Vec<&str> = employee.skills.iter().map(|s| s.name.as_str()).collect();
    println!("skills:   {}", skills.join(", "));
}
