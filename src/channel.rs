//! Distribution channels and the changelog pages that cover them

/// Desktop client operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopOs {
    Mac,
    Windows,
    Linux,
}

impl DesktopOs {
    pub fn as_str(&self) -> &'static str {
        match self {
            DesktopOs::Mac => "Mac OS",
            DesktopOs::Windows => "Windows",
            DesktopOs::Linux => "Linux",
        }
    }
}

/// Mobile app platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobilePlatform {
    Ios,
    Android,
}

impl MobilePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            MobilePlatform::Ios => "iOS",
            MobilePlatform::Android => "Android",
        }
    }
}

/// A distribution surface for the product. Each channel yields at most one
/// page reading and one changelog reading per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    ServerPackage,
    DesktopClient(DesktopOs),
    MobileApp(MobilePlatform),
    InfiniteScale,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::ServerPackage => "ownCloud Server",
            Channel::DesktopClient(os) => os.as_str(),
            Channel::MobileApp(platform) => platform.as_str(),
            Channel::InfiniteScale => "Infinite-scale",
        }
    }

    /// The changelog page that covers this channel. The desktop client
    /// publishes a single changelog for all three OS builds.
    pub fn changelog_source(&self) -> ChangelogSource {
        match self {
            Channel::ServerPackage => ChangelogSource::Server,
            Channel::DesktopClient(_) => ChangelogSource::Desktop,
            Channel::MobileApp(MobilePlatform::Ios) => ChangelogSource::IosApp,
            Channel::MobileApp(MobilePlatform::Android) => ChangelogSource::AndroidApp,
            Channel::InfiniteScale => ChangelogSource::InfiniteScale,
        }
    }
}

/// Product line a changelog page covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangelogSource {
    InfiniteScale,
    Server,
    Desktop,
    IosApp,
    AndroidApp,
}

impl ChangelogSource {
    /// Title used for this changelog in the report
    pub fn title(&self) -> &'static str {
        match self {
            ChangelogSource::InfiniteScale => "Infinite-scale",
            ChangelogSource::Server => "ownCloud Server",
            ChangelogSource::Desktop => "Desktop Client",
            ChangelogSource::IosApp => "iOS App",
            ChangelogSource::AndroidApp => "Android App",
        }
    }
}
