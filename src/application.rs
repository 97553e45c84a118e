use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::booking::book_counselling;
use crate::routes::contact::send_contact_email;
use crate::routes::counselling::submit_counselling_inquiry;
use crate::routes::health_check::health_check_controller;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::{SocketAddr, TcpListener};
use tracing_actix_web::TracingLogger;

pub struct Application {
    socket_addr: SocketAddr,
    address: String,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let sender = configuration
            .email_client
            .sender()
            .expect("Invalid sender email address");

        let recipient = configuration
            .email_client
            .recipient()
            .expect("Invalid recipient email address");

        let timeout = configuration.email_client.timeout();

        let email_client = EmailClient::new(
            configuration.email_client.base_url,
            configuration.email_client.sender_name,
            sender,
            recipient,
            configuration.email_client.authorization_token,
            timeout,
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        let tcp_listener = TcpListener::bind(&address)?;
        let address_assigned = tcp_listener.local_addr()?;

        let server = Application::start_server(tcp_listener, email_client)?;

        Ok(Self {
            socket_addr: address_assigned,
            address: address_assigned.to_string(),
            server,
        })
    }

    fn start_server(
        tcp_listener: TcpListener,
        email_client: EmailClient,
    ) -> Result<Server, std::io::Error> {
        let email_client_data = web::Data::new(email_client);

        let http_server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                // The marketing site posts the forms from another origin.
                .wrap(Cors::permissive())
                .route("/health_check", web::get().to(health_check_controller))
                .route("/submit-form", web::post().to(submit_counselling_inquiry))
                .route("/send-contact-email", web::post().to(send_contact_email))
                .route("/book-counselling", web::post().to(book_counselling))
                .app_data(email_client_data.clone())
        })
        .listen(tcp_listener)?
        .run();

        Ok(http_server)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn socket_addr(&self) -> &SocketAddr {
        &self.socket_addr
    }
}
