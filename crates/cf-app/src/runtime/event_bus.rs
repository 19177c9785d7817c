use tokio::sync::mpsc;

use super::command::FeedCommand;
use super::event::FeedEvent;

pub type FeedEventSender = mpsc::Sender<FeedEvent>;
pub type FeedEventReceiver = mpsc::Receiver<FeedEvent>;

pub type FeedCommandSender = mpsc::Sender<FeedCommand>;
pub type FeedCommandReceiver = mpsc::Receiver<FeedCommand>;
