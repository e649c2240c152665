use clap::{Parser, Subcommand};
use stackforge::{AppError, CreateOptions};

#[derive(Parser)]
#[command(name = "stackforge")]
#[command(version)]
#[command(
    about = "Scaffold ready-to-run web projects with databases, services, and modules",
    long_about = None
)]
struct Cli {
    /// Name of the project to create
    name: Option<String>,

    /// Stack to scaffold (nextjs, vite-react, nuxt, vite-react-express, express, symfony, laravel)
    #[arg(long)]
    stack: Option<String>,

    /// Databases to provision, comma-separated (postgresql, mongodb, mysql, redis, sqlite)
    #[arg(long = "db", value_delimiter = ',')]
    databases: Option<Vec<String>>,

    /// ORM to configure (prisma, none; PHP stacks imply theirs)
    #[arg(long)]
    orm: Option<String>,

    /// Auxiliary services, comma-separated (mailpit, minio, rabbitmq, adminer)
    #[arg(long, value_delimiter = ',')]
    services: Option<Vec<String>>,

    /// Feature modules, comma-separated (auth, crud, admin, file-upload, email, api-docs, i18n, dark-mode, ci-cd)
    #[arg(long, value_delimiter = ',')]
    modules: Option<Vec<String>>,

    /// Auth strategy when the auth module is selected (jwt, session)
    #[arg(long = "auth-strategy")]
    auth_strategy: Option<String>,

    /// Skip Docker Compose generation
    #[arg(long)]
    no_docker: bool,

    /// Use JavaScript instead of TypeScript
    #[arg(long)]
    no_typescript: bool,

    /// Skip ESLint and Prettier configuration
    #[arg(long)]
    no_eslint: bool,

    /// Accept defaults for everything not given as a flag
    #[arg(short = 'y', long)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects created on this machine
    #[clap(visible_alias = "ls")]
    List,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::List) => stackforge::list(),
        None => stackforge::create(CreateOptions {
            name: cli.name,
            stack: cli.stack,
            databases: cli.databases,
            orm: cli.orm,
            services: cli.services,
            modules: cli.modules,
            auth_strategy: cli.auth_strategy,
            no_docker: cli.no_docker,
            no_typescript: cli.no_typescript,
            no_eslint: cli.no_eslint,
            yes: cli.yes,
        }),
    };

    if let Err(e) = result {
        if e.is_cancellation() {
            eprintln!("Cancelled.");
            return;
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
