pub mod app;
pub mod login_screen;
pub mod reserved_modal;
pub mod spot_card;
pub mod spot_list;
pub mod wallet_panel;

pub use app::App;
pub use login_screen::LoginScreen;
pub use reserved_modal::ReservedModal;
pub use spot_card::SpotCard;
pub use spot_list::SpotList;
pub use wallet_panel::WalletPanel;
