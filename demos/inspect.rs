use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use console::Style;
use vimeo_networking::video_utils::preferred_file_for_video;
use vimeo_networking::{ModelObject, ObjectMapper, Page, User, Video};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Video,
    User,
    Videos,
}

#[derive(Debug, Parser)]
struct Args {
    // saved api response
    // ex. "tests/data/video.json"
    #[arg(short, long)]
    path: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Kind::Video)]
    kind: Kind,

    // screen size used to pick a playable file
    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn print_video(video: &Video, args: &Args) {
    let title = Style::new().bold();
    let dim = Style::new().dim();

    println!("{} {}", title.apply_to(&video.name), dim.apply_to(video.object_id().unwrap_or("-")));
    println!("  status:   {}", video.status);
    println!("  duration: {}s", video.duration);
    println!("  likes:    {}", video.like_count());
    println!("  comments: {}", video.comment_count());
    match preferred_file_for_video(video, args.width, args.height) {
        Some(file) => println!("  play:     {} ({})", file.quality, file.mime_type),
        None => println!("  play:     {}", dim.apply_to("no playable file")),
    }
}

fn handle(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(&args.path)?;
    let mapper = ObjectMapper::new();

    match args.kind {
        Kind::Video => {
            let video: Video = mapper.map_bytes(&bytes)?;
            print_video(&video, &args);
        }
        Kind::User => {
            let user: User = mapper.map_bytes(&bytes)?;
            let green = Style::new().green();
            println!("{} ({})", Style::new().bold().apply_to(&user.name), user.account);
            println!("  followers: {}", user.follower_count());
            println!("  videos:    {}", user.video_count());
            if user.is_followed() {
                println!("  {}", green.apply_to("following"));
            }
        }
        Kind::Videos => {
            let page: Page<Video> = mapper.map_bytes(&bytes)?;
            println!("page {} of {} videos", page.page, page.total);
            for video in page.data.iter() {
                print_video(video, &args);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = handle(args) {
        let red = Style::new().red();
        eprintln!("{}", red.apply_to(e));
        std::process::exit(1);
    }
}
