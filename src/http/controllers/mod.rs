use actix_web::web;

mod dashboard;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::get))
        .route("/", web::post().to(dashboard::post));
}
