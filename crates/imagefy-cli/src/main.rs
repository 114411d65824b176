//! Imagefy CLI: command-line client for the Imagefy API.
//!
//! Set IMAGEFY_API_KEY (and optionally IMAGEFY_API_URL / IMAGEFY_PROXY_*).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use imagefy_api_client::imagefy_core::{
    Abbreviation, CompressLossless, CompressLossy, Placeholder, QrPayload, ResizeFill, ResizeFit,
    ThumbnailBlurred, ThumbnailCropped, Watermark,
};
use imagefy_api_client::ImagefyClient;
use imagefy_cli::{init_tracing, SavedOutput};

#[derive(Parser)]
#[command(name = "imagefy", about = "Imagefy API CLI")]
struct Cli {
    /// Where to save the returned image
    #[arg(short, long, global = true, default_value = "output.png")]
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an avatar-style abbreviation image
    Abbreviation {
        /// Name or initials to render
        name: String,
        #[arg(long, default_value = "#000000")]
        background: String,
        #[arg(long, default_value = "#ffffff")]
        foreground: String,
        /// WxH, up to 999x999
        #[arg(long, default_value = "200x200")]
        size: String,
    },
    /// Generate a placeholder image
    Placeholder {
        text: String,
        #[arg(long, default_value = "#cccccc")]
        background: String,
        #[arg(long, default_value = "#333333")]
        foreground: String,
        /// WxH, up to 999x999
        #[arg(long, default_value = "640x480")]
        size: String,
    },
    /// Generate a QR code
    Qr {
        /// WxH, each side between 100 and 9999
        #[arg(long, default_value = "300x300")]
        size: String,
        #[command(subcommand)]
        payload: QrCommands,
    },
    /// Compress an image without quality loss
    CompressLossless { image: PathBuf },
    /// Compress an image with a target quality
    CompressLossy {
        image: PathBuf,
        /// 1 to 100
        #[arg(long, default_value = "80")]
        quality: u32,
    },
    /// Resize preserving aspect ratio, letterboxing the remainder
    ResizeFit {
        image: PathBuf,
        #[arg(long)]
        size: String,
        #[arg(long, default_value = "#000000")]
        background: String,
    },
    /// Resize to exact dimensions
    ResizeFill {
        image: PathBuf,
        #[arg(long)]
        size: String,
        /// cover or contain
        #[arg(long, default_value = "cover")]
        mode: String,
    },
    /// Cropped thumbnail
    ThumbnailCropped {
        image: PathBuf,
        #[arg(long, default_value = "150x150")]
        size: String,
    },
    /// Thumbnail over a blurred background
    ThumbnailBlurred {
        image: PathBuf,
        #[arg(long, default_value = "150x150")]
        size: String,
        /// 1 to 100
        #[arg(long, default_value = "50")]
        blur: u32,
    },
    /// Overlay a watermark image
    Watermark {
        image: PathBuf,
        watermark: PathBuf,
        /// Compass position, e.g. southeast
        #[arg(long, default_value = "southeast")]
        position: String,
        /// 1 to 100
        #[arg(long, default_value = "50")]
        opacity: u32,
        /// 1 to 100
        #[arg(long, default_value = "20")]
        scale: u32,
    },
}

#[derive(Subcommand)]
enum QrCommands {
    Bitcoin {
        address: String,
        #[arg(long)]
        amount: Option<f64>,
    },
    Monero {
        address: String,
        #[arg(long)]
        amount: Option<f64>,
    },
    Contact {
        first_name: String,
        last_name: String,
        /// +CCDDNNNNNNNNN
        phone: String,
        email: String,
    },
    Event {
        subject: String,
        /// Start date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        start_at: String,
        /// End date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        end_at: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    Geolocation {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    Mail {
        to: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    PhoneCall {
        phone: String,
    },
    SkypeCall {
        username: String,
    },
    Sms {
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    Text {
        text: String,
    },
    Url {
        url: String,
    },
    Whatsapp {
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    Wifi {
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        /// wpa, wep or nopass
        #[arg(long, default_value = "wpa")]
        encryption: String,
    },
    Bookmark {
        title: String,
        url: String,
    },
}

impl From<QrCommands> for QrPayload {
    fn from(command: QrCommands) -> Self {
        match command {
            QrCommands::Bitcoin { address, amount } => QrPayload::Bitcoin { address, amount },
            QrCommands::Monero { address, amount } => QrPayload::Monero { address, amount },
            QrCommands::Contact {
                first_name,
                last_name,
                phone,
                email,
            } => QrPayload::Contact {
                first_name,
                last_name,
                phone,
                email,
            },
            QrCommands::Event {
                subject,
                start_at,
                end_at,
                description,
                location,
            } => QrPayload::Event {
                subject,
                description,
                location,
                start_at,
                end_at,
            },
            QrCommands::Geolocation {
                latitude,
                longitude,
            } => QrPayload::Geolocation {
                latitude,
                longitude,
            },
            QrCommands::Mail { to, subject, body } => QrPayload::Mail { to, subject, body },
            QrCommands::PhoneCall { phone } => QrPayload::PhoneCall { phone },
            QrCommands::SkypeCall { username } => QrPayload::SkypeCall { username },
            QrCommands::Sms { phone, message } => QrPayload::Sms { phone, message },
            QrCommands::Text { text } => QrPayload::Text { text },
            QrCommands::Url { url } => QrPayload::Url { url },
            QrCommands::Whatsapp { phone, message } => QrPayload::Whatsapp { phone, message },
            QrCommands::Wifi {
                ssid,
                password,
                encryption,
            } => QrPayload::Wifi {
                ssid,
                password,
                encryption,
            },
            QrCommands::Bookmark { title, url } => QrPayload::Bookmark { title, url },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let client = ImagefyClient::from_env().context(
        "Failed to create API client. Set IMAGEFY_API_KEY (and optionally IMAGEFY_API_URL)",
    )?;

    let result = match cli.command {
        Commands::Abbreviation {
            name,
            background,
            foreground,
            size,
        } => {
            client
                .create_abbreviation(Abbreviation {
                    background,
                    foreground,
                    name,
                    size,
                })
                .await?
        }
        Commands::Placeholder {
            text,
            background,
            foreground,
            size,
        } => {
            client
                .create_placeholder(Placeholder {
                    background,
                    foreground,
                    text,
                    size,
                })
                .await?
        }
        Commands::Qr { size, payload } => client.create_qr_code(size, payload.into()).await?,
        Commands::CompressLossless { image } => {
            client.compress_lossless(CompressLossless { image }).await?
        }
        Commands::CompressLossy { image, quality } => {
            client.compress_lossy(CompressLossy { image, quality }).await?
        }
        Commands::ResizeFit {
            image,
            size,
            background,
        } => {
            client
                .resize_fit(ResizeFit {
                    image,
                    size,
                    background,
                })
                .await?
        }
        Commands::ResizeFill { image, size, mode } => {
            client.resize_fill(ResizeFill { image, size, mode }).await?
        }
        Commands::ThumbnailCropped { image, size } => {
            client
                .thumbnail_cropped(ThumbnailCropped { image, size })
                .await?
        }
        Commands::ThumbnailBlurred { image, size, blur } => {
            client
                .thumbnail_blurred(ThumbnailBlurred { image, size, blur })
                .await?
        }
        Commands::Watermark {
            image,
            watermark,
            position,
            opacity,
            scale,
        } => {
            client
                .watermark(Watermark {
                    image,
                    watermark,
                    position,
                    opacity,
                    scale,
                })
                .await?
        }
    };

    result
        .save(&cli.output)
        .await
        .with_context(|| format!("Failed to save result to {}", cli.output.display()))?;

    let summary = SavedOutput::new(&cli.output, &result);
    let out = serde_json::to_string_pretty(&summary).context("Serialize output")?;
    println!("{}", out);

    Ok(())
}
