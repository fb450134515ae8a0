//! `pyglass`: console front-end for the PyGlass Stock backend.
//!
//! Each subcommand maps to one page of the inventory app. Output goes to
//! stdout, errors to stderr as `error: <message>` with a non-zero exit code.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use pyglass_client::app::handlers::{auth, inventory, kardex, purchases, suppliers};
use pyglass_client::app::handlers::inventory::StockMove;
use pyglass_client::app::{AutoConfirm, Confirm, InFlight, ListView, StdinConfirm};
use pyglass_client::debug::{self, LogConfig};
use pyglass_client::ui::tables;
use pyglass_client::{
    ApiClient, AppError, ClientConfig, FileTokenStorage, InventoryService, Result, Session,
};
use shared::{NewMaterial, NewProduct, NewPurchaseOrder, NewSupplier};

#[derive(Debug, Parser)]
#[command(
    name = "pyglass",
    about = "Manage PyGlass Stock inventory, purchase orders and suppliers",
    version
)]
struct Cli {
    /// Backend base URL. Overrides `PYGLASS_API_URL`.
    #[arg(long = "api-url", value_name = "url", global = true)]
    api_url: Option<String>,
    /// Answer yes to every confirmation prompt.
    #[arg(short = 'y', long, global = true)]
    yes: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Exchange credentials for a token and remember it
    Login {
        #[arg(long, env = "PYGLASS_USERNAME")]
        username: String,
        #[arg(long, env = "PYGLASS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Show whether a token is stored
    Status,
    /// Raw materials
    #[command(subcommand)]
    Materials(MaterialCommand),
    /// Finished products
    #[command(subcommand)]
    Products(ProductCommand),
    /// Materials and products at or below their minimum stock
    Alerts,
    /// Purchase orders
    #[command(subcommand)]
    Orders(OrderCommand),
    /// Suppliers
    #[command(subcommand)]
    Suppliers(SupplierCommand),
    /// Stock movement ledger
    Kardex,
}

#[derive(Debug, Args)]
struct ItemFields {
    #[arg(long)]
    name: String,
    /// Family, e.g. `vidrio` or `aluminio`
    #[arg(long = "type")]
    kind: String,
    #[arg(long)]
    color: Option<String>,
    #[arg(long, default_value_t = 0)]
    stock: i64,
    #[arg(long = "min-stock", default_value_t = 0)]
    min_stock: i64,
}

#[derive(Debug, Subcommand)]
enum MaterialCommand {
    List,
    Add {
        #[command(flatten)]
        fields: ItemFields,
        #[arg(long)]
        supplier: Option<String>,
    },
    /// Overwrite the stock count
    SetStock { id: i64, stock: i64 },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
enum ProductCommand {
    List,
    Add {
        #[command(flatten)]
        fields: ItemFields,
        #[arg(long = "price")]
        sale_price: f64,
    },
    /// Overwrite the stock count
    SetStock { id: i64, stock: i64 },
    /// Put units into stock
    AddStock { id: i64, quantity: i64 },
    /// Take units out of stock
    RemoveStock { id: i64, quantity: i64 },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
enum OrderCommand {
    List,
    Create {
        #[arg(long)]
        supplier: i64,
        #[arg(long)]
        material: i64,
        #[arg(long)]
        quantity: i64,
    },
    /// Mark an order as received (raises stock)
    Complete { id: i64 },
    Cancel { id: i64 },
}

#[derive(Debug, Subcommand)]
enum SupplierCommand {
    List {
        /// Only suppliers of this material
        #[arg(long)]
        material: Option<i64>,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        material: i64,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let _log_guard = debug::init(&LogConfig::from_env());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url);
    }
    config.validate()?;

    let session = Arc::new(match &config.state_dir {
        Some(dir) => Session::new(FileTokenStorage::new(dir)),
        None => Session::unpersisted(),
    });
    let client = ApiClient::new(&config, Arc::clone(&session));
    let confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(StdinConfirm)
    };

    tracing::info!(api_url = %config.api_url, "Running command");

    let result = dispatch(cli.command, &client, confirm.as_ref()).await;
    if let Err(AppError::Api(e)) = &result {
        if e.is_unauthorized() && session.is_authenticated() {
            session.clear();
            eprintln!("Session expired or rejected; run `pyglass login` again.");
        }
    }
    result
}

async fn dispatch(command: Command, service: &dyn InventoryService, confirm: &dyn Confirm) -> Result<()> {
    let in_flight = InFlight::new();

    match command {
        Command::Login { username, password } => {
            auth::login(service, &username, &password).await?;
            println!("Logged in as {}.", username.trim());
        }
        Command::Logout => {
            auth::logout(service);
            println!("Logged out.");
        }
        Command::Status => {
            if service.is_authenticated() {
                println!("Logged in.");
            } else {
                println!("Not logged in.");
            }
        }
        Command::Materials(command) => run_materials(command, service, &in_flight, confirm).await?,
        Command::Products(command) => run_products(command, service, &in_flight, confirm).await?,
        Command::Alerts => {
            let mut materials = ListView::new();
            let mut products = ListView::new();
            let result = inventory::refresh_alerts(service, &mut materials, &mut products).await;
            println!("Materials below minimum:");
            print!("{}", tables::materials_table(materials.items()));
            println!();
            println!("Products below minimum:");
            print!("{}", tables::products_table(products.items()));
            result?;
        }
        Command::Orders(command) => run_orders(command, service, &in_flight, confirm).await?,
        Command::Suppliers(command) => run_suppliers(command, service, &in_flight).await?,
        Command::Kardex => {
            let mut view = ListView::new();
            kardex::refresh_kardex(service, &mut view).await?;
            print!("{}", tables::kardex_table(view.items()));
            let totals = kardex::movement_totals(view.items());
            println!("\nIn: {}  Out: {}", totals.inbound, totals.outbound);
        }
    }
    Ok(())
}

async fn run_materials(
    command: MaterialCommand,
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
) -> Result<()> {
    match command {
        MaterialCommand::List => {
            let mut view = ListView::new();
            inventory::refresh_materials(service, &mut view).await?;
            print!("{}", tables::materials_table(view.items()));
        }
        MaterialCommand::Add { fields, supplier } => {
            let form = NewMaterial {
                name: fields.name,
                kind: fields.kind,
                color: fields.color,
                stock: fields.stock,
                min_stock: fields.min_stock,
                supplier_name: supplier,
            };
            let material = inventory::create_material(service, in_flight, &form).await?;
            print!("{}", tables::materials_table(&[material]));
        }
        MaterialCommand::SetStock { id, stock } => {
            let material = inventory::set_material_stock(service, in_flight, id, stock).await?;
            print!("{}", tables::materials_table(&[material]));
        }
        MaterialCommand::Delete { id } => {
            inventory::delete_material(service, in_flight, confirm, id).await?;
            println!("Material #{} deleted.", id);
        }
    }
    Ok(())
}

async fn run_products(
    command: ProductCommand,
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
) -> Result<()> {
    let product = match command {
        ProductCommand::List => {
            let mut view = ListView::new();
            inventory::refresh_products(service, &mut view).await?;
            print!("{}", tables::products_table(view.items()));
            return Ok(());
        }
        ProductCommand::Delete { id } => {
            inventory::delete_product(service, in_flight, confirm, id).await?;
            println!("Product #{} deleted.", id);
            return Ok(());
        }
        ProductCommand::Add { fields, sale_price } => {
            let form = NewProduct {
                name: fields.name,
                kind: fields.kind,
                color: fields.color,
                stock: fields.stock,
                min_stock: fields.min_stock,
                sale_price,
            };
            inventory::create_product(service, in_flight, &form).await?
        }
        ProductCommand::SetStock { id, stock } => {
            inventory::set_product_stock(service, in_flight, id, stock).await?
        }
        ProductCommand::AddStock { id, quantity } => {
            inventory::move_product_stock(service, in_flight, id, StockMove::Add(quantity)).await?
        }
        ProductCommand::RemoveStock { id, quantity } => {
            inventory::move_product_stock(service, in_flight, id, StockMove::Remove(quantity))
                .await?
        }
    };
    print!("{}", tables::products_table(&[product]));
    Ok(())
}

async fn run_orders(
    command: OrderCommand,
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
) -> Result<()> {
    let mut view = ListView::new();
    match command {
        OrderCommand::List => {
            purchases::refresh_orders(service, &mut view).await?;
            print!("{}", tables::orders_table(view.items()));
        }
        OrderCommand::Create {
            supplier,
            material,
            quantity,
        } => {
            let form = NewPurchaseOrder {
                supplier_id: supplier,
                material_id: material,
                quantity,
            };
            let order =
                purchases::create_order_and_refresh(service, in_flight, &form, &mut view).await?;
            println!("Order #{} created.", order.id);
            print!("{}", tables::orders_table(view.items()));
        }
        OrderCommand::Complete { id } => {
            let order = purchases::complete_order(service, in_flight, confirm, id).await?;
            print!("{}", tables::orders_table(&[order]));
        }
        OrderCommand::Cancel { id } => {
            let order = purchases::cancel_order(service, in_flight, confirm, id).await?;
            print!("{}", tables::orders_table(&[order]));
        }
    }
    Ok(())
}

async fn run_suppliers(
    command: SupplierCommand,
    service: &dyn InventoryService,
    in_flight: &InFlight,
) -> Result<()> {
    let mut view = ListView::new();
    match command {
        SupplierCommand::List { material: None } => {
            suppliers::refresh_suppliers(service, &mut view).await?;
            print!("{}", tables::suppliers_table(view.items()));
        }
        SupplierCommand::List {
            material: Some(material_id),
        } => {
            suppliers::refresh_suppliers_for_material(service, material_id, &mut view).await?;
            print!("{}", tables::suppliers_table(view.items()));
        }
        SupplierCommand::Create {
            name,
            material,
            contact,
            phone,
            email,
            address,
        } => {
            let form = NewSupplier {
                name,
                contact_person: contact,
                phone,
                email,
                address,
                material_id: material,
            };
            let supplier = suppliers::create_supplier(service, in_flight, &form).await?;
            print!("{}", tables::suppliers_table(&[supplier]));
        }
    }
    Ok(())
}
