use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::{ContactSettings, Settings};
use crate::contact::ContactPipeline;
use crate::email_client::EmailClient;
use crate::routes::{FORM_LIMIT, form_error_handler, health_check, submit_contact};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client()?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, config.contact, email_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    contact: ContactSettings,
    email_client: EmailClient,
) -> Result<Server, anyhow::Error> {
    if let Err(missing) = contact.delivery_target() {
        tracing::warn!("{missing}");
    }
    let pipeline = web::Data::new(ContactPipeline::new(contact, email_client));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(
                web::FormConfig::default()
                    .limit(FORM_LIMIT)
                    .error_handler(form_error_handler),
            )
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::post().to(submit_contact))
            .app_data(pipeline.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
