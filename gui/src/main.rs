mod helpers;
mod logging;
mod messages;
mod state;
mod styles;
mod update;
mod views;

use std::sync::Arc;

use clap::Parser;
use iced::theme::Palette;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Color, Element, Fill, Length, Task, Theme};
use tracing::{info, warn};

use token_dashboard_core::amount::format_with_symbol;
use token_dashboard_core::{
    connect, parse_address, Address, ContractConfig, ContractFacade, Dashboard, LoadState,
    MockContract, Network, NetworkConfig,
};

use messages::Message;
use state::{Connection, Screen};

// Dark palette
const BG:      Color = Color::from_rgb(0.051, 0.067, 0.090); // #0d1117
const SIDEBAR: Color = Color::from_rgb(0.024, 0.039, 0.063); // #060a10
const SURFACE: Color = Color::from_rgb(0.114, 0.157, 0.227); // #1d283a
const BORDER:  Color = Color::from_rgb(0.204, 0.259, 0.337); // #344256
const ACTIVE:  Color = Color::from_rgb(0.086, 0.137, 0.251); // #162340
const MUTED:   Color = Color::from_rgb(0.396, 0.459, 0.545); // #65758b
const PRIMARY: Color = Color::from_rgb(0.384, 0.298, 0.906); // #624ce7

#[derive(Parser, Debug)]
#[command(name = "token-dashboard", about = "Desktop dashboard for an ERC-20/ERC-721 token", version)]
pub(crate) struct Args {
    /// Network to connect to: mainnet, sepolia or local
    #[arg(long, default_value = "local")]
    network: Network,

    /// Custom JSON-RPC endpoint (overrides --network)
    #[arg(long, env = "TOKEN_DASHBOARD_RPC_URL")]
    rpc_url: Option<String>,

    /// ERC-20 token contract address
    #[arg(long, env = "TOKEN_DASHBOARD_TOKEN", value_parser = parse_address)]
    token_contract: Option<Address>,

    /// ERC-721 contract address (default: the token contract)
    #[arg(long, env = "TOKEN_DASHBOARD_NFT", value_parser = parse_address)]
    nft_contract: Option<Address>,

    /// Account the provider signs for (default: first of eth_accounts)
    #[arg(long, env = "TOKEN_DASHBOARD_ACCOUNT", value_parser = parse_address)]
    account: Option<Address>,

    /// Token decimals used to scale amounts
    #[arg(long, default_value_t = 18)]
    decimals: u8,

    /// Allow connecting to non-HTTPS RPC URLs
    #[arg(long)]
    insecure: bool,

    /// Use the in-memory contract (default when no token contract is set)
    #[arg(long)]
    mock: bool,
}

impl Args {
    fn network_config(&self) -> NetworkConfig {
        match &self.rpc_url {
            Some(url) => NetworkConfig {
                network: Network::Custom,
                custom_url: Some(url.clone()),
            },
            None => NetworkConfig {
                network: self.network,
                custom_url: None,
            },
        }
    }

    /// Build the contract facade, or describe why there is none.
    fn connect(&self) -> (Option<Arc<dyn ContractFacade>>, Connection) {
        let token = match self.token_contract {
            Some(token) if !self.mock => token,
            _ => {
                info!("using in-memory mock contract");
                return (Some(Arc::new(MockContract::new())), Connection::Mock);
            }
        };

        let mut contracts = ContractConfig::new(token);
        contracts.nft = self.nft_contract;
        contracts.account = self.account;
        contracts.decimals = self.decimals;

        let network = self.network_config();
        match connect(&network, contracts, self.insecure) {
            Ok(contract) => {
                let connection = Connection::Rpc {
                    network: network.network,
                    url: contract.rpc_url().to_string(),
                    token,
                };
                (Some(Arc::new(contract)), connection)
            }
            Err(e) => {
                warn!(error = %e, "failed to set up provider");
                (None, Connection::Failed(e.to_string()))
            }
        }
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    iced::application(App::new, App::update, App::view)
        .title("Token Dashboard")
        .theme(App::theme)
        .run()
}

// -- App state --

pub(crate) struct App {
    screen: Screen,
    dashboard: Dashboard,
    facade: Option<Arc<dyn ContractFacade>>,
    connection: Connection,

    // Cached theme (avoids re-allocating every frame)
    theme: Theme,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let args = Args::parse();
        let (facade, connection) = args.connect();
        let (dashboard, initial) = Dashboard::new();

        let app = Self {
            screen: Screen::Overview,
            dashboard,
            facade,
            connection,
            theme: Theme::custom("Token Dashboard".to_string(), Palette {
                background: BG,
                text: Color::from_rgb(0.988, 0.988, 0.988),
                primary: PRIMARY,
                success: Color::from_rgb(0.059, 0.757, 0.718),
                warning: Color::from_rgb(1.0, 0.757, 0.027),
                danger: Color::from_rgb(0.906, 0.192, 0.192),
            }),
        };
        let task = app.dispatch(Some(initial));
        (app, task)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    // -- Views --

    fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();
        let header = self.view_header();
        let content: Element<Message> = match self.screen {
            Screen::Overview => self.view_overview(),
            Screen::Transact => self.view_transact(),
            Screen::Nfts => self.view_nfts(),
        };

        let right = column![header, styles::separator(), container(content).padding(20)]
            .width(Fill);

        row![sidebar, right].into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let nav_btn = |label: &'static str, target: Screen| -> Element<Message> {
            let active = self.screen == target;
            button(text(label).size(14))
                .width(Fill)
                .padding([8, 12])
                .style(styles::nav_btn(active))
                .on_press(Message::GoTo(target))
                .into()
        };

        let nav = column![
            nav_btn("Overview", Screen::Overview),
            nav_btn("Transact", Screen::Transact),
            nav_btn("NFTs", Screen::Nfts),
        ]
        .spacing(4);

        let connection = text(self.connection.to_string()).size(11).color(MUTED);

        let col = column![nav, Space::new().height(Fill), connection]
            .spacing(10)
            .padding(10)
            .width(Length::Fixed(200.0));

        container(col)
            .height(Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(SIDEBAR)),
                ..Default::default()
            })
            .into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let (name, balance) = match self.dashboard.snapshot() {
            LoadState::Loaded(s) => (
                s.symbol.clone(),
                format_with_symbol(&s.balance, &s.symbol),
            ),
            LoadState::Loading => ("Token".into(), "Loading...".into()),
            LoadState::LoadFailed(_) => ("Token".into(), "Unavailable".into()),
        };

        let left = column![text(name).size(14), text(balance).size(28)].spacing(2);
        let badge = container(text(self.connection.label()).size(12))
            .padding([4, 10])
            .style(styles::pill);

        row![left, Space::new().width(Fill), badge]
            .padding(15)
            .align_y(iced::Alignment::Center)
            .into()
    }
}
