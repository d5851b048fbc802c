use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::auth::AuthGate;
use crate::config::Settings;
use crate::routes::{
    handle_change_password, handle_connect_processor, handle_create_plan,
    handle_create_subscriber, handle_delete_plan, handle_delete_subscriber,
    handle_disconnect_processor, handle_export_report, handle_export_subscribers,
    handle_export_transactions, handle_get_dashboard, handle_get_processor, handle_get_profile,
    handle_get_report, handle_get_subscriber, handle_get_transaction, handle_list_plans,
    handle_list_subscribers, handle_list_transactions, handle_login, handle_logout,
    handle_set_theme, handle_toggle_plan, handle_toggle_subscriber, handle_update_plan,
    handle_update_profile, handle_update_subscriber, health_check,
};
use crate::store::plan_store::PlanStore;
use crate::store::report_store::ReportStore;
use crate::store::settings_store::SettingsStore;
use crate::store::subscriber_store::SubscriberStore;
use crate::store::transaction_store::TransactionStore;

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let listener =
            TcpListener::bind(config.get_address()).expect("Failed to bind the address.");
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, config)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, config: Settings) -> Result<Server, std::io::Error> {
    // Every store starts from its hardcoded seed; a restart resets all data
    let subscriber_store = web::Data::new(SubscriberStore::seeded());
    let plan_store = web::Data::new(PlanStore::seeded());
    let transaction_store = web::Data::new(TransactionStore::seeded());
    let report_store = web::Data::new(ReportStore::seeded());
    let settings_store = web::Data::new(SettingsStore::seeded());
    let auth_gate = web::Data::new(AuthGate::new());
    let admin = web::Data::new(config.get_admin());

    let server = HttpServer::new(move || {
        // App is where your application logic lives: routing, middlewares, request handler, etc
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/login", web::post().to(handle_login))
            .route("/logout", web::post().to(handle_logout))
            // Fixed paths are registered before the '{id}' matchers
            .route("/subscribers", web::get().to(handle_list_subscribers))
            .route("/subscribers", web::post().to(handle_create_subscriber))
            .route(
                "/subscribers/export",
                web::get().to(handle_export_subscribers),
            )
            .route("/subscribers/{id}", web::get().to(handle_get_subscriber))
            .route("/subscribers/{id}", web::put().to(handle_update_subscriber))
            .route(
                "/subscribers/{id}",
                web::delete().to(handle_delete_subscriber),
            )
            .route(
                "/subscribers/{id}/toggle",
                web::post().to(handle_toggle_subscriber),
            )
            .route("/plans", web::get().to(handle_list_plans))
            .route("/plans", web::post().to(handle_create_plan))
            .route("/plans/{id}", web::put().to(handle_update_plan))
            .route("/plans/{id}", web::delete().to(handle_delete_plan))
            .route("/plans/{id}/toggle", web::post().to(handle_toggle_plan))
            .route("/transactions", web::get().to(handle_list_transactions))
            .route(
                "/transactions/export",
                web::get().to(handle_export_transactions),
            )
            .route("/transactions/{id}", web::get().to(handle_get_transaction))
            .route("/reports", web::get().to(handle_get_report))
            .route("/reports/export", web::get().to(handle_export_report))
            .route("/dashboard", web::get().to(handle_get_dashboard))
            .route("/settings/profile", web::get().to(handle_get_profile))
            .route("/settings/profile", web::put().to(handle_update_profile))
            .route("/settings/password", web::post().to(handle_change_password))
            .route("/settings/theme", web::put().to(handle_set_theme))
            .route("/settings/processor", web::get().to(handle_get_processor))
            .route(
                "/settings/processor/connect",
                web::post().to(handle_connect_processor),
            )
            .route(
                "/settings/processor",
                web::delete().to(handle_disconnect_processor),
            )
            .app_data(subscriber_store.clone())
            .app_data(plan_store.clone())
            .app_data(transaction_store.clone())
            .app_data(report_store.clone())
            .app_data(settings_store.clone())
            .app_data(auth_gate.clone())
            .app_data(admin.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
