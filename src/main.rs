use golf_club_selector::args::{self, CleanArgs, Command};
use golf_club_selector::controller::selector::{configure_routes, new_session};
use golf_club_selector::model::ShotForm;
use golf_club_selector::one_shot::run_one_shot;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use serde_json::json;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", json!({"startup":"args","error": e.to_string()}));
            std::process::exit(2);
        }
    };

    match args.command.clone() {
        Command::Recommend {
            distance,
            elevation,
            wind_speed,
            wind_dir,
        } => {
            let form = ShotForm {
                distance,
                elevation,
                wind_speed,
                wind_dir,
            };
            let report = run_one_shot(args.bag, args.tuning, form)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Serve => serve(args).await,
    }
}

async fn serve(args: CleanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = new_session(args.bag, args.tuning);
    eprintln!(
        "{}",
        json!({"startup":"serve","host": args.host, "port": args.port})
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(store.clone()))
            .configure(configure_routes)
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
